use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use hwbot_common::error::PollError;

/// Source of raw homework status payloads.
pub trait HomeworkSource {
    /// Fetch statuses changed since `since` (Unix seconds). `None` or zero
    /// means "now".
    fn fetch(&self, since: Option<i64>) -> impl Future<Output = Result<Value, PollError>> + Send;
}

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&self, since: Option<i64>) -> Result<Value, PollError> {
        let from_date = match since {
            Some(ts) if ts != 0 => ts,
            _ => Utc::now().timestamp(),
        };

        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        // Errors are rendered without the request URL so the text stays stable
        // across cycles and deduplicates cleanly.
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                PollError::Other(format!(
                    "request to {} failed: {}",
                    self.endpoint,
                    e.without_url()
                ))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::Api {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            PollError::Other(format!(
                "undecodable response from {}: {}",
                self.endpoint,
                e.without_url()
            ))
        })
    }
}
