//! # hwbot Channels
//! Chat channel implementations used to deliver status notifications.

pub mod telegram;

pub use telegram::TelegramChannel;
