use crate::telegram::MessageSender;

/// Best-effort delivery of notifications to the configured chat.
///
/// Delivery failures are logged with their cause and swallowed; callers never
/// see them.
pub struct NotificationSink<S> {
    sender: S,
    chat_id: String,
}

impl<S: MessageSender> NotificationSink<S> {
    pub fn new(sender: S, chat_id: String) -> Self {
        Self { sender, chat_id }
    }

    pub async fn notify(&self, message: &str) {
        match self.sender.send_message(&self.chat_id, message).await {
            Ok(()) => {
                tracing::info!(chat_id = %self.chat_id, text = message, "Bot sent message");
            }
            Err(e) => {
                tracing::error!(
                    chat_id = %self.chat_id,
                    error = %e,
                    "Bot failed to send message"
                );
            }
        }
    }
}
