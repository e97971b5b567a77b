//! Errors raised while checking the input of a matching run.
//!
//! Every variant is raised before the first proposal, so a caller never
//! observes a partial matching.

use thiserror::Error;

/// Input rejected by the validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// A preference list omits a member of the opposite side
    #[error("missing preferences: {participant} on side {side} does not rank {missing}")]
    MissingPreferences {
        side: String,
        participant: String,
        missing: String,
    },

    /// A preference list names someone who is not on the opposite side
    #[error("unknown participant: {participant} on side {side} ranks {unknown}, who is not on the opposite side")]
    UnknownParticipant {
        side: String,
        participant: String,
        unknown: String,
    },

    /// The same identifier appears twice on one side
    #[error("duplicate participant {participant} on side {side}")]
    DuplicateParticipant { side: String, participant: String },

    /// Both sides carry the same label
    #[error("both sides are labeled {label}")]
    DuplicateSideLabel { label: String },
}

impl MatchingError {
    /// Is this the incomplete-preferences condition?
    pub fn is_missing_preferences(&self) -> bool {
        matches!(self, MatchingError::MissingPreferences { .. })
    }
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchingError::MissingPreferences {
            side: "side_A".into(),
            participant: "abc".into(),
            missing: "912".into(),
        };
        assert_eq!(
            err.to_string(),
            "missing preferences: abc on side side_A does not rank 912"
        );
        assert!(err.is_missing_preferences());

        let err = MatchingError::DuplicateSideLabel { label: "A".into() };
        assert_eq!(err.to_string(), "both sides are labeled A");
        assert!(!err.is_missing_preferences());
    }
}
