pub mod client;
pub mod poller;

use hwbot_common::config::AppConfig;
use hwbot_common::error::ConfigError;
use hwbot_notifier::{NotificationSink, TelegramClient};

use crate::client::PracticumClient;
use crate::poller::StatusPoller;

/// Validate configuration from `lookup`.
///
/// Missing credentials are logged as critical and returned as a
/// [`TokenError`](hwbot_common::error::TokenError) inside the `anyhow` error.
pub fn load_config<F>(lookup: F) -> anyhow::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match AppConfig::from_lookup(lookup) {
        Ok(config) => {
            tracing::info!(?config, "Token check passed");
            Ok(config)
        }
        Err(ConfigError::Token(e)) => {
            tracing::error!(
                severity = "critical",
                missing = ?e.missing,
                "Token check failed: required environment variables are missing at startup"
            );
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            Err(e.into())
        }
    }
}

/// Wire the production collaborators from a validated configuration.
pub fn build_poller(
    config: &AppConfig,
) -> anyhow::Result<StatusPoller<PracticumClient, TelegramClient>> {
    let source = PracticumClient::new(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        config.http_timeout(),
    )?;
    let telegram = TelegramClient::new(
        config.telegram_token.clone(),
        config.telegram_api_url.clone(),
        config.http_timeout(),
    )?;
    let sink = NotificationSink::new(telegram, config.telegram_chat_id.clone());

    Ok(StatusPoller::new(source, sink, config.poll_interval()))
}

/// Check credentials, then build the poller. No client exists, and so no
/// request can be made, unless the check passes.
pub fn startup<F>(lookup: F) -> anyhow::Result<StatusPoller<PracticumClient, TelegramClient>>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config(lookup)?;
    build_poller(&config)
}
