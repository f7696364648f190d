//! User-facing message keys attached to translated failures.
//!
//! A [`MessageKey`] is an opaque identifier into a localized message catalog. Resolving it
//! to text is the job of a [`MessageCatalog`]; this crate only ships [`FallbackCatalog`],
//! which returns a short English sentence for each key.

use std::borrow::Cow;

use crate::Severity;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    StillReferenced,
    QueryProblem,
    ServerConnection,
    UpdatedBySomeoneElse,
    UnexpectedError,
}

impl MessageKey {
    /// Identifier used to look the message up in a catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::StillReferenced => "angal.sql.theselecteditemisstillusedsomewhere",
            MessageKey::QueryProblem => "angal.sql.problemsoccurredwiththesqlistruction",
            MessageKey::ServerConnection => "angal.sql.problemsoccurredwithserverconnection",
            MessageKey::UpdatedBySomeoneElse => "angal.sql.thedatahasbeenupdatedbysomeoneelse",
            MessageKey::UnexpectedError => "angal.sql.anunexpectederroroccurredpleasecheckthelogs",
        }
    }

    /// Text shown when no catalog entry is available.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            MessageKey::StillReferenced => "item still referenced elsewhere",
            MessageKey::QueryProblem => "problem with the query",
            MessageKey::ServerConnection => "problem connecting to server",
            MessageKey::UpdatedBySomeoneElse => "data was updated by someone else",
            MessageKey::UnexpectedError => "unexpected error, check logs",
        }
    }

    pub fn from_catalog_id(s: &str) -> Option<Self> {
        [
            MessageKey::StillReferenced,
            MessageKey::QueryProblem,
            MessageKey::ServerConnection,
            MessageKey::UpdatedBySomeoneElse,
            MessageKey::UnexpectedError,
        ]
        .into_iter()
        .find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message payload carried by every translated failure.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionMessage {
    pub title: Option<String>,
    pub key: MessageKey,
    pub severity: Severity,
}

impl ExceptionMessage {
    pub fn new(key: MessageKey, severity: Severity) -> Self {
        Self {
            title: None,
            key,
            severity,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Resolves message keys to display text.
pub trait MessageCatalog: Send + Sync {
    fn resolve(&self, key: MessageKey) -> Cow<'static, str>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

impl MessageCatalog for FallbackCatalog {
    fn resolve(&self, key: MessageKey) -> Cow<'static, str> {
        Cow::Borrowed(key.fallback_text())
    }
}
