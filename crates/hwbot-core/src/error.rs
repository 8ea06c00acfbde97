//! Error type shared by all hwbot crates.

/// Unified error type for hwbot.
///
/// Every variant except `Credential` and `Config` is recoverable: the polling
/// loop turns it into a diagnostic notification and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum HwBotError {
    /// The API request could not be completed (connect failure, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-200 status or an unparseable body.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The decoded response does not have the documented shape.
    #[error("schema error: {0}")]
    Schema(String),

    /// A homework record lacks a required field.
    #[error("field error: {0}")]
    Field(String),

    /// A homework record carries an unknown or missing status.
    #[error("value error: {0}")]
    Value(String),

    /// A required credential is missing from the environment.
    #[error("credential error: {0}")]
    Credential(String),

    /// The chat channel rejected or failed to deliver a message.
    #[error("channel error: {0}")]
    Channel(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HwBotError>;
