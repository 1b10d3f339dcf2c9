use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::render::Tone;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// No colours or decorative glyphs.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind, plain: bool) -> (&'static str, &'static str) {
    match (kind, plain) {
        (MessageKind::Info, _) => ("INFO", ""),
        (MessageKind::Success, false) => ("SUCCESS", "[✓]"),
        (MessageKind::Warning, false) => ("WARNING", "[!]"),
        (MessageKind::Error, false) => ("ERROR", "[x]"),
        (MessageKind::Success, true) => ("SUCCESS", ""),
        (MessageKind::Warning, true) => ("WARNING", ""),
        (MessageKind::Error, true) => ("ERROR", ""),
        (MessageKind::Hint, _) => ("HINT", ""),
        (MessageKind::Section, _) => ("", ""),
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind, prefs.plain_mode);
            if icon.is_empty() {
                format!("{label}: {text}")
            } else {
                format!("{label}: {icon} {text}")
            }
        }
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints preformatted text without a label.
pub fn raw(text: impl fmt::Display) {
    println!("{}", text);
}

/// Colours a value by tone: green for income, red for expenses.
pub fn paint(tone: Tone, text: &str) -> String {
    if current_preferences().plain_mode {
        return text.to_string();
    }
    match tone {
        Tone::Positive => text.green().to_string(),
        Tone::Negative => text.red().to_string(),
        Tone::Neutral => text.to_string(),
    }
}
