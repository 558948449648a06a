use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CashflowError, Result};

pub const DB_FILE_NAME: &str = "cashflow.db";

/// Missing fields take their value from `Settings::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: String,
    pub currency_symbol: String,
    pub busy_timeout_secs: u64,
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

fn default_busy_timeout_secs() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            currency_symbol: default_currency_symbol(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(DB_FILE_NAME)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cashflow")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("cashflow")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(&path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "unreadable settings file, using defaults");
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| CashflowError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "¥");
        assert_eq!(s.busy_timeout_secs, 5);
        assert!(s.data_dir.ends_with("cashflow"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let json = r#"{"data_dir": "/tmp/cf"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.currency_symbol, "¥");
        assert_eq!(s.busy_timeout(), Duration::from_secs(5));
        assert_eq!(s.db_path(), PathBuf::from("/tmp/cf/cashflow.db"));
    }

    #[test]
    fn test_missing_data_dir_keeps_other_fields() {
        let s: Settings = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.busy_timeout_secs, 5);
        assert_eq!(s.data_dir, Settings::default().data_dir);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            currency_symbol: "$".to_string(),
            busy_timeout_secs: 2,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: Settings =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.busy_timeout_secs, 2);
        assert_eq!(loaded.data_dir, "/tmp/test");
    }
}
