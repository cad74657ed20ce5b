use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use hwbot_common::error::PollError;
use hwbot_common::types::CURRENT_DATE_FIELD;
use hwbot_engine::{extract_work_items, status_text};
use hwbot_notifier::{MessageSender, NotificationSink};

use crate::client::HomeworkSource;

/// State carried between poll cycles. Lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request; advanced to the server clock after
    /// every successful cycle.
    pub last_poll_timestamp: Option<i64>,
    /// Last status text handed to the sink.
    pub last_status: String,
    /// Last error text handed to the sink.
    pub last_error: String,
}

/// What a single cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status text changed and a notification was attempted.
    Notified,
    /// Status text matched the previous one; nothing was sent.
    Unchanged,
    /// The cycle failed; `notified` tells whether the error text was new.
    Failed { notified: bool },
}

/// Homework status poller: fetch, validate, format, deduplicate, notify.
pub struct StatusPoller<H, S> {
    source: H,
    sink: NotificationSink<S>,
    poll_interval: Duration,
    state: PollState,
}

impl<H: HomeworkSource, S: MessageSender> StatusPoller<H, S> {
    /// Create a poller whose first request asks for changes since now.
    pub fn new(source: H, sink: NotificationSink<S>, poll_interval: Duration) -> Self {
        Self {
            source,
            sink,
            poll_interval,
            state: PollState {
                last_poll_timestamp: Some(Utc::now().timestamp()),
                ..PollState::default()
            },
        }
    }

    /// Start from an explicit `from_date` instead of the current time.
    pub fn with_start_timestamp(mut self, timestamp: Option<i64>) -> Self {
        self.state.last_poll_timestamp = timestamp;
        self
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run the polling loop. Never returns; stop it by dropping the future.
    pub async fn run(&mut self) {
        tracing::info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            from_date = ?self.state.last_poll_timestamp,
            "Status poller started"
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(self.poll_interval).await;
            tracing::info!("Checking again");
        }
    }

    /// Execute one cycle. Every error is handled here; none escapes.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        match self.check().await {
            Ok((text, current_date)) => {
                let outcome = if text != self.state.last_status {
                    self.sink.notify(&text).await;
                    self.state.last_status = text;
                    CycleOutcome::Notified
                } else {
                    tracing::debug!("No new statuses in API response");
                    CycleOutcome::Unchanged
                };

                self.state.last_poll_timestamp = current_date;
                outcome
            }
            Err(e) => {
                let message = format!("Bot malfunction: {e}");
                let notified = message != self.state.last_error;
                if notified {
                    self.sink.notify(&message).await;
                    self.state.last_error = message.clone();
                }
                tracing::error!(kind = e.kind(), notified, "{message}");
                CycleOutcome::Failed { notified }
            }
        }
    }

    /// Fetch and interpret one payload, returning the status text and the
    /// server clock to resume from.
    async fn check(&self) -> Result<(String, Option<i64>), PollError> {
        let payload = self.source.fetch(self.state.last_poll_timestamp).await?;
        tracing::info!("Received API response");

        let items = extract_work_items(&payload)?;
        let text = status_text(items)?;

        Ok((text, resume_timestamp(&payload)))
    }
}

/// Server clock to resume from. Anything but an integer `current_date` makes
/// the next poll start from now.
fn resume_timestamp(payload: &Value) -> Option<i64> {
    let raw = payload.get(CURRENT_DATE_FIELD);
    let timestamp = raw.and_then(Value::as_i64);
    if timestamp.is_none() {
        tracing::warn!(
            received = %raw.map_or_else(|| "<missing>".to_string(), serde_json::Value::to_string),
            "API response has no integer `current_date`; next poll starts from now"
        );
    }
    timestamp
}
