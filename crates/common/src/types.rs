use serde::{Deserialize, Serialize};

/// Payload field holding the list of work items.
pub const HOMEWORKS_FIELD: &str = "homeworks";

/// Payload field holding the server clock, used as the next `from_date`.
pub const CURRENT_DATE_FIELD: &str = "current_date";

/// One homework submission as reported by the review service.
///
/// Lives only for the poll cycle that received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(rename = "homework_name")]
    pub name: String,
    pub status: String,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}
