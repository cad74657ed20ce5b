//! Payload shape checks for homework status responses.

use serde_json::Value;

use hwbot_common::error::PollError;
use hwbot_common::types::HOMEWORKS_FIELD;

/// Extract the raw work items from a status payload.
///
/// The `homeworks` field must hold a JSON array; a missing field or any other
/// JSON type is a [`PollError::NotList`]. An empty array is a valid answer and
/// means nothing is under review. Items are returned as sent, in server order;
/// individual records are only decoded when formatted.
pub fn extract_work_items(payload: &Value) -> Result<&[Value], PollError> {
    payload
        .get(HOMEWORKS_FIELD)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(PollError::NotList {
            field: HOMEWORKS_FIELD,
        })
}
