//! Secrets read from the environment at startup.

use std::fmt;

use crate::error::{HwBotError, Result};

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// API token, bot token and chat id. Immutable once loaded.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read all three credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`. Unset and empty values both count
    /// as missing; the error names every missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        tracing::info!("Checking that all tokens are available");

        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let practicum_token = get(PRACTICUM_TOKEN);
        let telegram_token = get(TELEGRAM_TOKEN);
        let telegram_chat_id = get(TELEGRAM_CHAT_ID);

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => Ok(Self {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            }),
            (p, t, c) => {
                let missing: Vec<&str> = [
                    (PRACTICUM_TOKEN, p.is_none()),
                    (TELEGRAM_TOKEN, t.is_none()),
                    (TELEGRAM_CHAT_ID, c.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(HwBotError::Credential(format!(
                    "missing environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}
