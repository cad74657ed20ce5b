//! Outbound notification delivery.
//!
//! [`TelegramClient`] talks to the Telegram Bot API; [`NotificationSink`]
//! wraps any [`MessageSender`] and turns delivery into a best-effort,
//! log-and-continue operation so a broken channel never stops the poller.

pub mod sink;
pub mod telegram;

pub use sink::NotificationSink;
pub use telegram::{MessageSender, NotifyError, TelegramClient};
