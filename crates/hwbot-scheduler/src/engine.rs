//! Polling loop — fetch, validate, translate, notify on change, sleep.
//! Cursor and last-sent message live on the loop and are only touched by it.

use std::time::Duration;

use hwbot_core::error::{HwBotError, Result};
use hwbot_core::traits::MessageSender;
use serde_json::Value;

use crate::api::ApiPoller;
use crate::notify::Notifier;
use crate::validate::check_response;
use crate::verdict::parse_status;

pub const START_MESSAGE: &str = "Bot starts operation";
pub const NO_NEW_STATUS: &str = "No new status";

/// Diagnostic text reported when an iteration fails.
pub fn failure_message(error: &HwBotError) -> String {
    format!("Сбой в работе программы: {error}")
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// What a single iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Iteration {
    /// A new status message was handed to the notifier.
    Sent(String),
    /// The status message matched the last one sent; nothing was sent.
    Unchanged(String),
    /// The iteration failed; `sent` is false when the same diagnostic was
    /// already reported.
    Failed { message: String, sent: bool },
}

/// The status polling loop.
pub struct PollingLoop<S> {
    poller: ApiPoller,
    notifier: Notifier<S>,
    retry_period: Duration,
    cursor: i64,
    last_sent: String,
}

impl<S: MessageSender> PollingLoop<S> {
    pub fn new(poller: ApiPoller, notifier: Notifier<S>, retry_period: Duration) -> Self {
        Self {
            poller,
            notifier,
            retry_period,
            cursor: now(),
            last_sent: String::new(),
        }
    }

    /// Lower bound (unix seconds) of the next poll window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_sent(&self) -> &str {
        &self.last_sent
    }

    /// Announce startup and open the poll window at the current time.
    pub async fn start(&mut self) {
        self.notifier.notify(START_MESSAGE).await;
        tracing::info!("{START_MESSAGE}");
        self.cursor = now();
    }

    /// Run forever: one iteration, then sleep for the retry period.
    pub async fn run(mut self) {
        self.start().await;
        tracing::info!(
            "Polling {} every {}s",
            self.poller.endpoint(),
            self.retry_period.as_secs()
        );

        loop {
            self.run_once().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One poll. Errors never escape; they become a diagnostic notification.
    pub async fn run_once(&mut self) -> Iteration {
        match self.poll().await {
            Ok(message) => {
                if message != self.last_sent {
                    self.deliver(message.clone()).await;
                    Iteration::Sent(message)
                } else {
                    tracing::info!("Status unchanged: {message}");
                    Iteration::Unchanged(message)
                }
            }
            Err(error) => {
                let message = failure_message(&error);
                tracing::error!("{message}");
                let sent = message != self.last_sent;
                if sent {
                    self.deliver(message.clone()).await;
                }
                Iteration::Failed { message, sent }
            }
        }
    }

    async fn poll(&mut self) -> Result<String> {
        let response = self.poller.fetch(self.cursor).await?;
        self.cursor = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or_else(now);

        let homeworks = check_response(&response)?;
        match homeworks.first() {
            Some(homework) => parse_status(homework),
            None => Ok(NO_NEW_STATUS.to_string()),
        }
    }

    async fn deliver(&mut self, message: String) {
        self.notifier.notify(&message).await;
        self.last_sent = message;
    }
}
