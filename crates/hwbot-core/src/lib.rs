//! # hwbot Core
//! Shared building blocks for the homework status notifier:
//! errors, configuration, credentials, the chat sender trait and API types.

pub mod config;
pub mod credentials;
pub mod error;
pub mod traits;
pub mod types;

pub use config::HwBotConfig;
pub use credentials::Credentials;
pub use error::{HwBotError, Result};
pub use traits::MessageSender;
pub use types::ReviewStatus;
