//! Structured, log-friendly pretty-print helpers.
//!
//! Gated behind the `serde` feature so consumers that only need the failure types do not
//! pull in serialization.

#![cfg(feature = "serde")]

use serde::Serialize;

use crate::{DomainFailure, FailureCategory, Severity};

/// Provide a structured view of a failure for logging/UI.
pub trait PrettyDebug {
    type Fields<'a>: Serialize + 'a
    where
        Self: 'a;

    fn fields(&self) -> Option<Self::Fields<'_>>;

    /// Convert fields to a JSON value without pretty whitespace.
    fn to_value(&self) -> Option<serde_json::Value> {
        self.fields().and_then(|f| serde_json::to_value(&f).ok())
    }

    /// Convert fields to a pretty JSON string (for logs or UI).
    fn pretty_json(&self) -> Option<String> {
        self.fields()
            .and_then(|f| serde_json::to_string_pretty(&f).ok())
    }
}

#[derive(Debug, Serialize)]
pub struct FailureFields<'a> {
    pub category: FailureCategory,
    pub message_key: &'static str,
    pub title: Option<&'a str>,
    pub severity: Severity,
    pub cause: String,
}

impl PrettyDebug for DomainFailure {
    type Fields<'a> = FailureFields<'a>;

    fn fields(&self) -> Option<Self::Fields<'_>> {
        Some(FailureFields {
            category: self.category(),
            message_key: self.message_key().as_str(),
            title: self.message().title.as_deref(),
            severity: self.severity(),
            cause: self.cause().to_string(),
        })
    }
}
