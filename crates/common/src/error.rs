use thiserror::Error;

/// Required credentials were absent or empty at startup.
///
/// This is the only condition that stops the bot; it is raised before any
/// network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required environment variables: {}", .missing.join(", "))]
pub struct TokenError {
    /// Names of the variables that were missing or empty, in lookup order.
    pub missing: Vec<&'static str>,
}

/// Errors raised while building [`AppConfig`](crate::config::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{var} must be a valid {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Errors that abort a single poll cycle.
///
/// None of these terminate the polling loop: each is reported through the
/// notification channel (deduplicated by message text) and logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// The review service answered with a non-success HTTP status.
    #[error("endpoint {endpoint} is unavailable, API response code: {status}")]
    Api { endpoint: String, status: u16 },

    /// The payload field holding work items is missing or not a JSON array.
    #[error("malformed API response: `{field}` must be a list")]
    NotList { field: &'static str },

    /// A work item carries a status code absent from the catalog.
    #[error("undocumented homework status `{status}` found in API response")]
    StatusKey { status: String },

    /// Anything else: transport failures, undecodable bodies, malformed items.
    #[error("{0}")]
    Other(String),
}

impl PollError {
    /// Short machine-readable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Api { .. } => "api",
            PollError::NotList { .. } => "not_list",
            PollError::StatusKey { .. } => "status_key",
            PollError::Other(_) => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_lists_missing_variables() {
        let err = TokenError {
            missing: vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_api_error_names_endpoint_and_status() {
        let err = PollError::Api {
            endpoint: "https://example.test/statuses/".into(),
            status: 503,
        };
        let text = err.to_string();
        assert!(text.contains("https://example.test/statuses/"));
        assert!(text.contains("503"));
    }

    #[test]
    fn test_other_error_preserves_description() {
        let err = PollError::Other("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PollError>();
        assert_send_sync::<ConfigError>();
    }
}
