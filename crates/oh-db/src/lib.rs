//! Data access for the hospital information system, with failure translation
//! into [`oh_error::DomainFailure`]s.

pub mod config;
mod error;
pub mod memory;
pub mod service;
pub mod translate;

pub use config::{ConfigError, DbConfig, StoreConfig, TranslatorConfig};
pub use error::{ClassifiableFailure, DataAccessError};
pub use memory::{MemoryStore, Record, RowRef, Versioned};
pub use service::{TranslatableService, Translated};
pub use translate::{classify, translate, translate_async, TranslateExt, Translator};

pub use oh_error::{DomainFailure, FailureCategory, MessageKey, Severity};
