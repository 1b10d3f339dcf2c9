use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("show") => {
            show(context);
            Ok(())
        }
        Some("set") => {
            let key = args.get(1).ok_or_else(usage)?;
            if args.len() < 3 {
                return Err(usage());
            }
            let value = args[2..].join(" ");
            set(context, key, &value)
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`"
        ))),
    }
}

fn usage() -> CommandError {
    CommandError::InvalidArguments("Usage: config set <key> <value>".into())
}

fn show(context: &ShellContext) {
    output::section("Configuration");
    let entries = context.config.entries();
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in entries {
        output::raw(format!("  {key:<width$}  {value}"));
    }
    output::raw(format!("  (stored in {})", context.config_manager.path().display()));
}

/// Applies the change to a copy first so a failed save leaves the session as it was.
fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    context.apply_output_preferences();
    output::success(format!("Updated {key}."));
    Ok(())
}
