//! Translation of data-access failures into [`DomainFailure`]s.
//!
//! Any operation whose failures must not reach callers in their original form is run
//! through a [`Translator`]: success passes through untouched, every failure is classified
//! and replaced by exactly one `DomainFailure` carrying the original as its cause.
//! Failures that match no known category are logged once before being returned.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::future::IntoFuture;

use oh_error::{DomainFailure, FailureCategory};

use crate::config::TranslatorConfig;
use crate::ClassifiableFailure;

/// Category of `failure`. Categories are tested in [`FailureCategory::PRIORITY`] order and
/// the first probe that answers `true` decides.
pub fn classify<E: ClassifiableFailure + ?Sized>(failure: &E) -> FailureCategory {
    FailureCategory::PRIORITY
        .into_iter()
        .find(|category| probe(failure, *category))
        .unwrap_or(FailureCategory::Unclassified)
}

fn probe<E: ClassifiableFailure + ?Sized>(failure: &E, category: FailureCategory) -> bool {
    match category {
        FailureCategory::ReferentialIntegrityViolation => failure.is_integrity_violation(),
        FailureCategory::MalformedQuery => failure.is_invalid_query(),
        FailureCategory::ConnectionUnavailable => failure.is_connection_failure(),
        FailureCategory::OptimisticLockConflict => failure.is_optimistic_lock_conflict(),
        FailureCategory::Unclassified => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate_err<E: ClassifiableFailure>(&self, failure: E) -> DomainFailure {
        self.translate_labeled(None, failure)
    }

    pub(crate) fn translate_labeled<E: ClassifiableFailure>(
        &self,
        operation: Option<&str>,
        failure: E,
    ) -> DomainFailure {
        let category = classify(&failure);
        if category == FailureCategory::Unclassified {
            self.log_unclassified(operation, &failure);
        }
        DomainFailure::new(category, failure)
    }

    /// Run `op`, translating its failure.
    pub fn run<T, E, F>(&self, op: F) -> Result<T, DomainFailure>
    where
        F: FnOnce() -> Result<T, E>,
        E: ClassifiableFailure,
    {
        op().map_err(|e| self.translate_err(e))
    }

    /// Await `fut`, translating its failure. No timeout is applied.
    pub async fn run_async<T, E, F>(&self, fut: F) -> Result<T, DomainFailure>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: ClassifiableFailure,
    {
        fut.await.map_err(|e| self.translate_err(e))
    }

    fn log_unclassified<E: ClassifiableFailure>(&self, operation: Option<&str>, failure: &E) {
        let chain = if self.config.log_cause_chain {
            cause_chain(failure)
        } else {
            String::new()
        };
        let backtrace = if self.config.capture_backtrace {
            Backtrace::force_capture().to_string()
        } else {
            String::new()
        };

        tracing::error!(
            operation = operation.unwrap_or("<unnamed>"),
            category = FailureCategory::Unclassified.as_str(),
            error = %failure,
            cause = ?failure,
            cause_chain = %chain,
            backtrace = %backtrace,
            "unexpected failure in translatable operation"
        );
    }
}

fn cause_chain<E: StdError + ?Sized>(failure: &E) -> String {
    let mut parts = Vec::new();
    let mut next = failure.source();
    while let Some(err) = next {
        parts.push(err.to_string());
        next = err.source();
    }
    parts.join(" <- ")
}

/// Run `op` through a default [`Translator`].
pub fn translate<T, E, F>(op: F) -> Result<T, DomainFailure>
where
    F: FnOnce() -> Result<T, E>,
    E: ClassifiableFailure,
{
    Translator::default().run(op)
}

/// Await `fut` through a default [`Translator`].
pub async fn translate_async<T, E, F>(fut: F) -> Result<T, DomainFailure>
where
    F: IntoFuture<Output = Result<T, E>>,
    E: ClassifiableFailure,
{
    Translator::default().run_async(fut).await
}

/// Call-site form of [`translate`]: `store.delete::<Ward>("W").translate()?`.
pub trait TranslateExt<T> {
    fn translate(self) -> Result<T, DomainFailure>;

    fn translate_with(self, translator: &Translator) -> Result<T, DomainFailure>;
}

impl<T, E: ClassifiableFailure> TranslateExt<T> for Result<T, E> {
    fn translate(self) -> Result<T, DomainFailure> {
        self.translate_with(&Translator::default())
    }

    fn translate_with(self, translator: &Translator) -> Result<T, DomainFailure> {
        self.map_err(|e| translator.translate_err(e))
    }
}
