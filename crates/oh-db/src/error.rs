//! Failure kinds reported by the data-access layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Integrity violation on {relation}: {detail}")]
    IntegrityViolation { relation: String, detail: String },

    #[error("Invalid use of {relation}: {detail}")]
    InvalidResourceUsage { relation: String, detail: String },

    #[error("Could not open a transaction: {detail}")]
    CannotCreateTransaction { detail: String },

    #[error("Row {key} in {relation} is at version {actual}, update expected {expected}")]
    OptimisticLockFailure {
        relation: String,
        key: String,
        expected: u64,
        actual: u64,
    },

    #[error("No row {key} in {relation}")]
    NotFound { relation: String, key: String },

    #[error("Store lock poisoned by a panicked {operation}")]
    Poisoned { operation: &'static str },

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl DataAccessError {
    pub fn integrity(relation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::IntegrityViolation {
            relation: relation.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid_usage(relation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidResourceUsage {
            relation: relation.into(),
            detail: detail.into(),
        }
    }

    pub fn no_transaction(detail: impl Into<String>) -> Self {
        Self::CannotCreateTransaction {
            detail: detail.into(),
        }
    }
}

/// Probes the classifier uses to decide which category a failure belongs to.
///
/// Every probe defaults to `false`, so an error type that implements none of them is
/// classified as unclassified. A failure kind related to several categories may answer
/// `true` to more than one probe; the classifier decides which one wins.
pub trait ClassifiableFailure: std::error::Error + Send + Sync + 'static {
    fn is_integrity_violation(&self) -> bool {
        false
    }

    fn is_invalid_query(&self) -> bool {
        false
    }

    fn is_connection_failure(&self) -> bool {
        false
    }

    fn is_optimistic_lock_conflict(&self) -> bool {
        false
    }
}

impl ClassifiableFailure for DataAccessError {
    fn is_integrity_violation(&self) -> bool {
        matches!(self, DataAccessError::IntegrityViolation { .. })
    }

    fn is_invalid_query(&self) -> bool {
        matches!(self, DataAccessError::InvalidResourceUsage { .. })
    }

    fn is_connection_failure(&self) -> bool {
        matches!(self, DataAccessError::CannotCreateTransaction { .. })
    }

    fn is_optimistic_lock_conflict(&self) -> bool {
        matches!(self, DataAccessError::OptimisticLockFailure { .. })
    }
}

impl ClassifiableFailure for std::io::Error {}

impl ClassifiableFailure for serde_json::Error {}
