//! Middleware that routes every failure of a service through the [`Translator`].

use std::future::Future;

use oh_error::DomainFailure;
use tracing::Instrument;

use crate::translate::Translator;
use crate::ClassifiableFailure;

/// Marks a service whose operations are translatable.
pub trait TranslatableService: Send + Sync {
    /// Label used in diagnostics for failures coming out of this service.
    const NAME: &'static str;
}

/// Wraps a [`TranslatableService`] so that callers only ever see [`DomainFailure`]s.
///
/// ```rust,ignore
/// let wards = Translated::new(WardIoOperations::new(store));
/// let deleted = wards.call(|ops| ops.delete_ward("M"))?;
/// ```
#[derive(Debug, Clone)]
pub struct Translated<S> {
    inner: S,
    translator: Translator,
}

impl<S: TranslatableService> Translated<S> {
    pub fn new(inner: S) -> Self {
        Self::with_translator(inner, Translator::default())
    }

    pub fn with_translator(inner: S, translator: Translator) -> Self {
        Self { inner, translator }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn call<T, E, F>(&self, op: F) -> Result<T, DomainFailure>
    where
        F: FnOnce(&S) -> Result<T, E>,
        E: ClassifiableFailure,
    {
        let span = tracing::debug_span!("translatable", service = S::NAME);
        let _guard = span.enter();
        op(&self.inner).map_err(|e| self.translator.translate_labeled(Some(S::NAME), e))
    }

    pub async fn call_async<'a, T, E, F, Fut>(&'a self, op: F) -> Result<T, DomainFailure>
    where
        F: FnOnce(&'a S) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: ClassifiableFailure,
    {
        let span = tracing::debug_span!("translatable", service = S::NAME);
        op(&self.inner)
            .instrument(span)
            .await
            .map_err(|e| self.translator.translate_labeled(Some(S::NAME), e))
    }
}
