//! Homework status API client.

use hwbot_core::config::PracticumConfig;
use hwbot_core::error::{HwBotError, Result};
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

/// Issues the status request for a poll window.
pub struct ApiPoller {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ApiPoller {
    pub fn new(config: &PracticumConfig, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HwBotError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch statuses changed since `cursor` (unix seconds).
    pub async fn fetch(&self, cursor: i64) -> Result<Value> {
        tracing::info!(
            "Begin request to API: {} from_date={}",
            self.endpoint,
            cursor
        );

        let result = self.request(cursor).await;
        match &result {
            Ok(_) => tracing::info!("Got API response: {} from_date={}", self.endpoint, cursor),
            Err(e) => tracing::info!(
                "API request failed: {} from_date={}: {e}",
                self.endpoint,
                cursor
            ),
        }
        result
    }

    async fn request(&self, cursor: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(|e| HwBotError::Transport(format!("Request to API failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(HwBotError::Upstream(format!(
                "API response does not return 200. Response code: {}. Reason: {}. Text: {}.",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
                text
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| HwBotError::Transport(format!("Failed to read API response: {e}")))?;
        serde_json::from_str(&text)
            .map_err(|e| HwBotError::Upstream(format!("API response is not valid JSON: {e}")))
    }
}
