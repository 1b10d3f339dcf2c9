use chrono::format::{Item, StrftimeItems};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
pub const HOME_ENV: &str = "POCKET_LEDGER_HOME";

/// Display preferences. Ledger entries are never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub timestamp_format: String,
    pub plain_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            timestamp_format: "%Y-%m-%d %H:%M".into(),
            plain_mode: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 3] = ["currency_symbol", "timestamp_format", "plain_mode"];

    /// Updates a single preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "timestamp_format" => {
                if value.trim().is_empty() || !is_valid_strftime(value) {
                    return Err(LedgerError::Config(format!(
                        "timestamp_format `{value}` is not a valid strftime pattern"
                    )));
                }
                self.timestamp_format = value.to_string();
            }
            "plain_mode" => {
                self.plain_mode = parse_flag(value).ok_or_else(|| {
                    LedgerError::Config(format!("plain_mode expects on/off, got `{value}`"))
                })?;
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("timestamp_format", self.timestamp_format.clone()),
            ("plain_mode", self.plain_mode.to_string()),
        ]
    }
}

fn is_valid_strftime(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Returns the application data directory, defaulting to `~/.pocket_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            if !is_valid_strftime(&config.timestamp_format) {
                return Err(LedgerError::Config(format!(
                    "timestamp_format `{}` in {} is not a valid strftime pattern",
                    config.timestamp_format,
                    self.path.display()
                )));
            }
            tracing::debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
