//! Fixed mapping from review status codes to verdict text.

/// Review statuses the homework service is documented to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Look up a status code as reported by the API. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken for review.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(HomeworkStatus::from_code("approved"), Some(HomeworkStatus::Approved));
        assert_eq!(HomeworkStatus::from_code("reviewing"), Some(HomeworkStatus::Reviewing));
        assert_eq!(HomeworkStatus::from_code("rejected"), Some(HomeworkStatus::Rejected));
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(HomeworkStatus::from_code("Approved"), None);
        assert_eq!(HomeworkStatus::from_code(" approved"), None);
        assert_eq!(HomeworkStatus::from_code(""), None);
        assert_eq!(HomeworkStatus::from_code("pending"), None);
    }

    #[test]
    fn test_code_round_trips_through_lookup() {
        for status in HomeworkStatus::ALL {
            assert_eq!(HomeworkStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let verdicts: std::collections::HashSet<_> =
            HomeworkStatus::ALL.iter().map(|s| s.verdict()).collect();
        assert_eq!(verdicts.len(), HomeworkStatus::ALL.len());
    }
}
