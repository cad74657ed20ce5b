use std::time::Duration;

use crate::error::{ConfigError, TokenError};

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Bot configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework status endpoint (overridable for staging and tests)
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL, without the `/bot<token>` suffix
    pub telegram_api_url: String,

    /// Pause between poll cycles in seconds (default: 10)
    pub poll_interval_secs: u64,

    /// Per-request HTTP timeout in seconds (default: 30)
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Build the configuration from a variable lookup, typically
    /// `std::env::var` after `.env` has been loaded.
    ///
    /// All three credentials are checked before anything else so the
    /// resulting [`TokenError`] names every missing one at once. A variable
    /// set to the empty string counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let (practicum_token, telegram_token, telegram_chat_id) = match (
            required(PRACTICUM_TOKEN),
            required(TELEGRAM_TOKEN),
            required(TELEGRAM_CHAT_ID),
        ) {
            (Some(practicum), Some(telegram), Some(chat_id)) => (practicum, telegram, chat_id),
            (practicum, telegram, chat_id) => {
                let missing = [
                    (PRACTICUM_TOKEN, practicum.is_none()),
                    (TELEGRAM_TOKEN, telegram.is_none()),
                    (TELEGRAM_CHAT_ID, chat_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(TokenError { missing }.into());
            }
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            poll_interval_secs: parse_secs(
                "POLL_INTERVAL_SECS",
                lookup("POLL_INTERVAL_SECS"),
                DEFAULT_POLL_INTERVAL_SECS,
            )?,
            http_timeout_secs: parse_secs(
                "HTTP_TIMEOUT_SECS",
                lookup("HTTP_TIMEOUT_SECS"),
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected: "u64",
            value,
        }),
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (PRACTICUM_TOKEN, "practicum-secret"),
            (TELEGRAM_TOKEN, "123:telegram-secret"),
            (TELEGRAM_CHAT_ID, "42"),
        ]
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.practicum_endpoint, DEFAULT_PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_optional_overrides() {
        let mut env = full_env();
        env.push(("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/"));
        env.push(("POLL_INTERVAL_SECS", "600"));
        let config = AppConfig::from_lookup(lookup_from(&env)).unwrap();
        assert_eq!(config.practicum_endpoint, "http://localhost:8080/statuses/");
        assert_eq!(config.poll_interval_secs, 600);
    }

    #[test]
    fn test_each_missing_token_is_reported() {
        for name in [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID] {
            let env: Vec<_> = full_env().into_iter().filter(|(k, _)| *k != name).collect();
            match AppConfig::from_lookup(lookup_from(&env)) {
                Err(ConfigError::Token(err)) => assert_eq!(err.missing, vec![name]),
                other => panic!("expected TokenError for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let env = [
            (PRACTICUM_TOKEN, ""),
            (TELEGRAM_TOKEN, "123:telegram-secret"),
            (TELEGRAM_CHAT_ID, ""),
        ];
        match AppConfig::from_lookup(lookup_from(&env)) {
            Err(ConfigError::Token(err)) => {
                assert_eq!(err.missing, vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]);
            }
            other => panic!("expected TokenError, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let mut env = full_env();
        env.push(("POLL_INTERVAL_SECS", "soon"));
        let err = AppConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "POLL_INTERVAL_SECS",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = AppConfig::from_lookup(lookup_from(&full_env())).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("practicum-secret"));
        assert!(!rendered.contains("telegram-secret"));
        assert!(rendered.contains("42"));
    }
}
