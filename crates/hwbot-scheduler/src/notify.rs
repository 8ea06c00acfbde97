//! Notification delivery that never fails the caller.

use hwbot_core::traits::MessageSender;

/// Wraps a [`MessageSender`] and swallows delivery errors.
pub struct Notifier<S> {
    sender: S,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Deliver `message`. A failed delivery is logged and otherwise ignored,
    /// so a broken chat channel cannot stop the polling loop.
    pub async fn notify(&self, message: &str) {
        match self.sender.send_text(message).await {
            Ok(()) => tracing::info!("Sent via {}: {}", self.sender.name(), message),
            Err(e) => tracing::error!(
                "Something went wrong sending message via {}: {e}",
                self.sender.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hwbot_core::error::{HwBotError, Result};
    use std::sync::Mutex;

    struct FlakySender {
        fail: bool,
        attempts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageSender for FlakySender {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn send_text(&self, text: &str) -> Result<()> {
            self.attempts.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(HwBotError::Channel("chat not found".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_notify_delivers() {
        let notifier = Notifier::new(FlakySender {
            fail: false,
            attempts: Mutex::new(Vec::new()),
        });
        notifier.notify("hello").await;
        assert_eq!(*notifier.sender().attempts.lock().unwrap(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_notify_swallows_delivery_errors() {
        let notifier = Notifier::new(FlakySender {
            fail: true,
            attempts: Mutex::new(Vec::new()),
        });
        notifier.notify("one").await;
        notifier.notify("two").await;
        assert_eq!(notifier.sender().attempts.lock().unwrap().len(), 2);
    }
}
