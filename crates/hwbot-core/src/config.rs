//! hwbot configuration system.
//!
//! Secrets are never stored here; see [`crate::credentials`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{HwBotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HwBotConfig {
    #[serde(default)]
    pub practicum: PracticumConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl HwBotConfig {
    /// Load config from the default path (~/.hwbot/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HwBotError::Config(format!("Failed to read config {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| HwBotError::Config(format!("Failed to parse config: {e}")))
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hwbot")
            .join("config.toml")
    }
}

/// Homework status API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Pause between the end of one poll and the start of the next.
    #[serde(default = "default_retry_period")]
    pub retry_period_secs: u64,
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
}
fn default_retry_period() -> u64 {
    600
}
fn default_api_timeout() -> u64 {
    30
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_period_secs: default_retry_period(),
            timeout_secs: default_api_timeout(),
        }
    }
}

impl PracticumConfig {
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Telegram Bot API settings. The token and chat id come from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_telegram_api_base")]
    pub api_base: String,
    #[serde(default = "default_telegram_timeout")]
    pub timeout_secs: u64,
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".into()
}
fn default_telegram_timeout() -> u64 {
    10
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: default_telegram_api_base(),
            timeout_secs: default_telegram_timeout(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// File that log entries are appended to, next to stdout.
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_file() -> String {
    "main.log".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HwBotConfig::default();
        assert_eq!(config.practicum.retry_period_secs, 600);
        assert_eq!(config.practicum.timeout_secs, 30);
        assert!(config.practicum.endpoint.ends_with("/homework_statuses/"));
        assert_eq!(config.telegram.api_base, "https://api.telegram.org");
        assert_eq!(config.log.file, "main.log");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = HwBotConfig::parse(
            r#"
            [practicum]
            retry_period_secs = 60

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.practicum.retry_period(), Duration::from_secs(60));
        assert_eq!(config.practicum.timeout_secs, 30);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, "main.log");
    }

    #[test]
    fn test_invalid_toml() {
        let err = HwBotConfig::parse("[practicum\nretry = ").unwrap_err();
        assert!(matches!(err, HwBotError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("hwbot-test-no-such-config.toml");
        let err = HwBotConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
