use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::{ExceptionMessage, FailureCategory, MessageCatalog, MessageKey, Severity};

/// Shared handle to the original failure behind a [`DomainFailure`].
pub type SharedCause = Arc<dyn StdError + Send + Sync + 'static>;

/// The failure surfaced to callers of a translatable operation.
///
/// Built once per intercepted failure and never mutated afterwards. The original failure is
/// kept as `cause` for diagnostics and is also returned from [`StdError::source`].
#[derive(Clone)]
pub struct DomainFailure {
    category: FailureCategory,
    message: ExceptionMessage,
    cause: SharedCause,
}

impl DomainFailure {
    /// Build a failure with the category's message key and `Severity::Error`.
    pub fn new<E>(category: FailureCategory, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_shared(category, Arc::new(cause))
    }

    pub fn from_shared(category: FailureCategory, cause: SharedCause) -> Self {
        Self {
            category,
            message: ExceptionMessage::new(category.message_key(), Severity::Error),
            cause,
        }
    }

    pub fn category(&self) -> FailureCategory {
        self.category
    }

    pub fn message(&self) -> &ExceptionMessage {
        &self.message
    }

    pub fn message_key(&self) -> MessageKey {
        self.message.key
    }

    pub fn severity(&self) -> Severity {
        self.message.severity
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Downcast the original failure to a concrete type.
    pub fn cause_as<T: StdError + 'static>(&self) -> Option<&T> {
        self.cause.downcast_ref::<T>()
    }

    /// Resolve the message key to display text through `catalog`.
    pub fn user_message(&self, catalog: &dyn MessageCatalog) -> Cow<'static, str> {
        catalog.resolve(self.message.key)
    }

    pub fn is_unclassified(&self) -> bool {
        self.category == FailureCategory::Unclassified
    }
}

impl fmt::Debug for DomainFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainFailure")
            .field("category", &self.category)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for DomainFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.category, self.message.key, self.cause)
    }
}

impl StdError for DomainFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}
