use crate::{DomainFailure, ErrorPolicy, Result, Severity};

/// Extension trait for `Result` enabling policy-driven emission without
/// contaminating core control-flow with side-effects.
///
/// Typical usage: at the boundary where a translated failure reaches the application,
/// call one of the helpers to emit it via your chosen [`ErrorPolicy`], while preserving
/// the original result for further handling.
pub trait ResultExt<T> {
    /// Emit the failure using the provided policy and return the result unchanged
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;

    /// If the result is a failure classified as a warning, emit it
    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self;

    /// If the result is a failure classified as an error, emit it
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self;

    /// If the result is a failure classified as fatal, emit it
    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }

    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self {
        emit_at(self, policy, Severity::Warning)
    }

    fn emit_error(self, policy: &impl ErrorPolicy) -> Self {
        emit_at(self, policy, Severity::Error)
    }

    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self {
        emit_at(self, policy, Severity::Fatal)
    }
}

fn emit_at<T>(result: Result<T>, policy: &impl ErrorPolicy, level: Severity) -> Result<T> {
    if let Err(ref e) = result {
        if policy.classify(e) == level {
            policy.emit(e);
        }
    }
    result
}

/// Iterator helpers over `Result` to reduce boilerplate at boundaries.
///
/// - `collect_ok`: eagerly collects `Ok` items, returning the first failure.
/// - `first_failure`: scans and returns the first failure without allocation.
pub trait IterResultExt<T>: Sized {
    fn collect_ok(self) -> Result<Vec<T>>;
    fn first_failure(self) -> Option<DomainFailure>;
}

impl<I, T> IterResultExt<T> for I
where
    I: IntoIterator<Item = Result<T>>,
{
    fn collect_ok(self) -> Result<Vec<T>> {
        let mut out = Vec::new();
        for r in self {
            out.push(r?);
        }
        Ok(out)
    }

    fn first_failure(self) -> Option<DomainFailure> {
        self.into_iter().find_map(|r| r.err())
    }
}
