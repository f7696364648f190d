pub mod category;
pub mod domain;
pub mod message;
pub mod policy;
pub mod pretty;
pub mod result_ext;
pub mod severity;

// public exports
pub use category::FailureCategory;
pub use domain::{DomainFailure, SharedCause};
pub use message::{ExceptionMessage, FallbackCatalog, MessageCatalog, MessageKey};
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
#[cfg(feature = "serde")]
pub use pretty::{FailureFields, PrettyDebug};
pub use result_ext::{IterResultExt, ResultExt};
pub use severity::Severity;

pub type Result<T, E = DomainFailure> = std::result::Result<T, E>;
