//! Error types for rowdiff.
//!
//! The diff itself cannot fail. Errors only arise when an edit sequence is
//! replayed against a widget whose state does not match the snapshot the
//! diff was computed from.

use thiserror::Error;

use crate::position::Position;

/// Consistency violations reported by a widget during replay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A batched edit or `end_updates` arrived with no open batch
    #[error("no open batch: call begin_updates first")]
    NoOpenBatch,

    /// `begin_updates` arrived while a batch was already open
    #[error("batch already open")]
    NestedBatch,

    /// The position does not exist in the state it addresses
    #[error("{position} is out of range")]
    RowOutOfRange {
        /// Offending position
        position: Position,
    },

    /// The section does not exist in the state it addresses
    #[error("section {section} is out of range")]
    SectionOutOfRange {
        /// Offending section index
        section: usize,
    },

    /// Section count after the batch disagrees with the data source
    #[error("invalid number of sections: data source has {expected}, batch yields {found}")]
    SectionCountMismatch {
        /// Sections in the data source
        expected: usize,
        /// Sections the batch would produce
        found: usize,
    },

    /// Row count of a section after the batch disagrees with the data source
    #[error("invalid number of rows in section {section}: data source has {expected}, batch yields {found}")]
    RowCountMismatch {
        /// Post-batch section index
        section: usize,
        /// Rows in the data source
        expected: usize,
        /// Rows the batch would produce
        found: usize,
    },

    /// Two edits in one batch claim the same row
    #[error("{position} is addressed by more than one edit")]
    DuplicatePosition {
        /// Offending position
        position: Position,
    },
}

/// Result type alias for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReplayError::RowCountMismatch {
            section: 0,
            expected: 4,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid number of rows in section 0: data source has 4, batch yields 5"
        );

        let err = ReplayError::RowOutOfRange {
            position: Position::new(7, 1),
        };
        assert_eq!(err.to_string(), "row 7 in section 1 is out of range");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReplayError>();
    }
}
