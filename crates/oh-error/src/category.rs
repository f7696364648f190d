use crate::MessageKey;

/// The nature of an underlying data-access failure, as seen by callers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    ReferentialIntegrityViolation,
    MalformedQuery,
    ConnectionUnavailable,
    OptimisticLockConflict,
    Unclassified,
}

impl FailureCategory {
    /// Mapped categories in the order they are tested; the first match wins.
    /// `Unclassified` is the fallthrough and is not listed.
    pub const PRIORITY: [FailureCategory; 4] = [
        FailureCategory::ReferentialIntegrityViolation,
        FailureCategory::MalformedQuery,
        FailureCategory::ConnectionUnavailable,
        FailureCategory::OptimisticLockConflict,
    ];

    pub fn message_key(&self) -> MessageKey {
        match self {
            FailureCategory::ReferentialIntegrityViolation => MessageKey::StillReferenced,
            FailureCategory::MalformedQuery => MessageKey::QueryProblem,
            FailureCategory::ConnectionUnavailable => MessageKey::ServerConnection,
            FailureCategory::OptimisticLockConflict => MessageKey::UpdatedBySomeoneElse,
            FailureCategory::Unclassified => MessageKey::UnexpectedError,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::ReferentialIntegrityViolation => "referential_integrity_violation",
            FailureCategory::MalformedQuery => "malformed_query",
            FailureCategory::ConnectionUnavailable => "connection_unavailable",
            FailureCategory::OptimisticLockConflict => "optimistic_lock_conflict",
            FailureCategory::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
