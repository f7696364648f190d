//! A policy for classifying and emitting translated failures.
//!
//! Libraries should not log or print translated failures directly; they return
//! [`crate::Result`] and let the application install an `ErrorPolicy` to decide how to
//! present or route them.
//!
//! Example
//! ```rust,ignore
//! use oh_error::{DomainFailure, ErrorPolicy, Severity};
//!
//! struct PrintPolicy;
//! impl ErrorPolicy for PrintPolicy {
//!     fn classify(&self, e: &DomainFailure) -> Severity { e.severity() }
//!     fn emit(&self, e: &DomainFailure) { eprintln!("[{:?}] {e}", self.classify(e)); }
//! }
//! ```
use crate::{DomainFailure, Severity};

pub trait ErrorPolicy: Send + Sync {
    /// Classify the failure's severity
    fn classify(&self, failure: &DomainFailure) -> Severity;

    /// Emit the failure according to the policy (e.g., log, send to UI, etc.)
    fn emit(&self, failure: &DomainFailure);
}

/// A no-operation policy that does nothing
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn classify(&self, failure: &DomainFailure) -> Severity {
        failure.severity()
    }

    fn emit(&self, _failure: &DomainFailure) {}
}

/// Uses the failure's own severity and emits via tracing
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn classify(&self, failure: &DomainFailure) -> Severity {
        failure.severity()
    }

    fn emit(&self, failure: &DomainFailure) {
        use tracing::{event, Level};

        let category = failure.category().as_str();
        let key = failure.message_key().as_str();
        match failure.severity() {
            Severity::Warning => event!(Level::WARN, category, key, error = %failure),
            Severity::Error | Severity::Fatal => {
                event!(Level::ERROR, category, key, error = %failure)
            }
        }
    }
}

/// Delegates to multiple policies.
///
/// - classify: returns the maximum severity among inner policies (defaulting to the
///   failure's own severity when empty).
/// - emit: delegates emission to all inner policies in insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            policies: Vec::with_capacity(capacity),
        }
    }

    /// Add a policy by value (boxed internally). Consumes and returns `Self` for chaining.
    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn add_boxed(mut self, policy: Box<dyn ErrorPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn classify(&self, failure: &DomainFailure) -> Severity {
        self.policies
            .iter()
            .map(|p| p.classify(failure))
            .fold(failure.severity(), Severity::max)
    }

    fn emit(&self, failure: &DomainFailure) {
        for p in &self.policies {
            p.emit(failure);
        }
    }
}
