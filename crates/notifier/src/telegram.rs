use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while delivering a message.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The Bot API answered with a non-success status or `"ok": false`.
    #[error("Telegram API error (status {status}): {description}")]
    Api { status: u16, description: String },

    /// Transport failure. The request URL is stripped because it embeds the
    /// bot token.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

/// Anything that can deliver a text message to a chat.
pub trait MessageSender {
    fn send_message(
        &self,
        chat_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Minimal Telegram Bot API client: only `sendMessage` is needed.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a client for `base_url` (e.g. `https://api.telegram.org`).
    pub fn new(token: String, base_url: String, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Network(e.without_url()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

impl MessageSender for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.without_url()))?;

        let status = response.status();
        let body = response.json::<BotApiResponse>().await.ok();

        match body {
            Some(BotApiResponse { ok: true, .. }) if status.is_success() => Ok(()),
            body => Err(NotifyError::Api {
                status: status.as_u16(),
                description: body
                    .and_then(|b| b.description)
                    .unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}
