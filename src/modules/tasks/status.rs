use std::fmt;

/// Rejection message listing every accepted label.
pub const STATUS_VALIDATION_MESSAGE: &str = "Invalid status. Status must be To do, Completed, \
     Cancelled, On Hold, Deferred, In Progress, Pending, Failed or Reviewing";

/// Task lifecycle states.
///
/// A process-wide constant table: each state maps to one display label, and
/// the label text is what goes over the wire and into the `status` column.
/// Candidates are matched case-insensitively against labels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Todo,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
    Pending,
    Reviewing,
    Failed,
    Deferred,
}

impl Status {
    pub const ALL: [Status; 9] = [
        Status::Todo,
        Status::InProgress,
        Status::Completed,
        Status::OnHold,
        Status::Cancelled,
        Status::Pending,
        Status::Reviewing,
        Status::Failed,
        Status::Deferred,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To do",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::OnHold => "On Hold",
            Status::Cancelled => "Cancelled",
            Status::Pending => "Pending",
            Status::Reviewing => "Reviewing",
            Status::Failed => "Failed",
            Status::Deferred => "Deferred",
        }
    }

    /// True iff `candidate` case-insensitively equals one of the labels.
    pub fn matches(candidate: &str) -> bool {
        Self::from_label(candidate).is_some()
    }

    pub fn from_label(candidate: &str) -> Option<Status> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(candidate))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_label_exactly() {
        assert!(Status::matches("In Progress"));
        assert!(Status::matches("To do"));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(Status::matches("in progress"));
        assert!(Status::matches("TO DO"));
        assert!(Status::matches("cAnCeLlEd"));
    }

    #[test]
    fn test_rejects_unknown_candidates() {
        assert!(!Status::matches("N/A"));
        assert!(!Status::matches(""));
        // Identifier names are not labels.
        assert!(!Status::matches("IN_PROGRESS"));
        assert!(!Status::matches("TODO"));
    }

    #[test]
    fn test_all_labels_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn test_table_has_nine_states() {
        assert_eq!(Status::ALL.len(), 9);
    }
}
