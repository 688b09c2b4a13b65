//! Application services for the server registry.

mod form;
mod notifier;
mod registry;

pub use form::{FormError, SaveOutcome, ServerDraft, ServerForm};
pub use notifier::Notifier;
pub use registry::{ServerRegistry, ServerRegistryError, ServerRegistryResult};
