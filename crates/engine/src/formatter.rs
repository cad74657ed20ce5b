use serde::Deserialize;
use serde_json::Value;

use hwbot_common::error::PollError;
use hwbot_common::types::WorkItem;

use crate::catalog::HomeworkStatus;

/// Status text used when the server reports no work items.
pub const NO_HOMEWORK_MESSAGE: &str = "No homework under review.";

/// Render the notification for a single work item.
///
/// Fails with [`PollError::StatusKey`] when the status code is not in the
/// catalog; undocumented statuses are never skipped silently.
pub fn format_status(item: &WorkItem) -> Result<String, PollError> {
    let status = HomeworkStatus::from_code(&item.status).ok_or_else(|| PollError::StatusKey {
        status: item.status.clone(),
    })?;

    Ok(format!(
        "Review status of homework \"{}\" changed. {}",
        item.name,
        status.verdict()
    ))
}

/// Compute the status text for one poll: only the first item counts, and
/// only that item is decoded.
pub fn status_text(items: &[Value]) -> Result<String, PollError> {
    match items.first() {
        None => Ok(NO_HOMEWORK_MESSAGE.to_string()),
        Some(raw) => {
            let item = WorkItem::deserialize(raw)
                .map_err(|e| PollError::Other(format!("malformed homework record: {e}")))?;
            format_status(&item)
        }
    }
}
