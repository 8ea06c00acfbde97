//! Seams between the polling loop and the outside world.

use async_trait::async_trait;

use crate::error::Result;

/// Something that can deliver a text message to the fixed recipient.
///
/// The recipient is bound when the sender is constructed; callers only
/// supply the text.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Channel name, used in logs.
    fn name(&self) -> &str;

    /// Deliver `text`. Errors are `HwBotError::Channel`.
    async fn send_text(&self, text: &str) -> Result<()>;
}
