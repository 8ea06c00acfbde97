//! Telegram Bot channel — message sending via Bot API.

use async_trait::async_trait;
use hwbot_core::config::TelegramConfig;
use hwbot_core::error::{HwBotError, Result};
use hwbot_core::traits::MessageSender;
use serde::{Deserialize, Serialize};

/// Telegram Bot channel bound to a single chat.
pub struct TelegramChannel {
    config: TelegramConfig,
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramChannel {
    pub fn new(config: TelegramConfig, bot_token: &str, chat_id: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HwBotError::Channel(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            client,
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.bot_token,
            method
        )
    }

    /// Send a plain text message to the bound chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        // reqwest errors carry the URL, which embeds the bot token.
        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| HwBotError::Channel(format!("sendMessage failed: {}", e.without_url())))?;

        let status = response.status();
        let result: TelegramApiResponse<serde_json::Value> = response.json().await.map_err(|e| {
            HwBotError::Channel(format!("Invalid send response ({status}): {}", e.without_url()))
        })?;

        if !result.ok {
            return Err(HwBotError::Channel(format!(
                "Send failed ({status}): {}",
                result.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Get bot info.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self
            .client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map_err(|e| HwBotError::Channel(format!("getMe failed: {}", e.without_url())))?;
        let body: TelegramApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| HwBotError::Channel(format!("Invalid getMe response: {}", e.without_url())))?;
        if !body.ok {
            return Err(HwBotError::Channel(format!(
                "getMe failed: {}",
                body.description.unwrap_or_default()
            )));
        }
        body.result
            .ok_or_else(|| HwBotError::Channel("No bot info".into()))
    }
}

#[async_trait]
impl MessageSender for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        tracing::debug!("Sending status to telegram chat {}", self.chat_id);
        self.send_message(text).await
    }
}

// --- Telegram API Types ---

#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}
