//! Add/edit form protocol over the registry.
//!
//! The form holds at most one [`ServerDraft`]. A draft is a private copy: it
//! never aliases a stored record, and cancelling drops it without touching
//! the registry. On save, the form decides between add and edit by checking
//! whether the draft's identifier currently exists in the registry.

use mockable::Clock;
use thiserror::Error;

use super::{ServerRegistry, ServerRegistryError};
use crate::server_registry::domain::{
    ParseServerStatusError, ServerFields, ServerId, ServerPatch, ServerRecord, ServerStatus,
};

/// Editable copy of a record (or a new-record template).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDraft {
    id: Option<ServerId>,
    /// Field values as currently edited.
    pub fields: ServerFields,
}

impl ServerDraft {
    /// Returns the identifier copied from the edited record, or `None` for a
    /// new-record draft, which gets its identifier only when saved.
    #[must_use]
    pub const fn id(&self) -> Option<ServerId> {
        self.id
    }

    /// Sets the status from loosely-typed form input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseServerStatusError`] when `value` is neither `online`
    /// nor `offline`; the draft is unchanged.
    pub fn set_status_str(&mut self, value: &str) -> Result<(), ParseServerStatusError> {
        self.fields.status = ServerStatus::try_from(value)?;
        Ok(())
    }
}

/// What a successful save did to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was appended.
    Added(ServerRecord),
    /// An existing record was replaced.
    Updated(ServerRecord),
}

impl SaveOutcome {
    /// Returns the stored record.
    #[must_use]
    pub const fn record(&self) -> &ServerRecord {
        match self {
            Self::Added(record) | Self::Updated(record) => record,
        }
    }
}

/// Errors raised by form transitions.
#[derive(Debug, Clone, Error)]
pub enum FormError {
    /// Save or cancel was requested with no draft open.
    #[error("no server form is open")]
    NotOpen,

    /// The registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] ServerRegistryError),
}

/// Single-dialog form state: closed, or open with one draft.
#[derive(Debug, Clone, Default)]
pub struct ServerForm {
    draft: Option<ServerDraft>,
}

impl ServerForm {
    /// Creates a closed form.
    #[must_use]
    pub const fn new() -> Self {
        Self { draft: None }
    }

    /// Returns `true` while a draft is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns the open draft.
    #[must_use]
    pub const fn draft(&self) -> Option<&ServerDraft> {
        self.draft.as_ref()
    }

    /// Returns the open draft for editing.
    pub const fn draft_mut(&mut self) -> Option<&mut ServerDraft> {
        self.draft.as_mut()
    }

    /// Opens a new-record draft seeded with placeholder values.
    ///
    /// No identifier is allocated until the draft is saved.
    pub fn open_add<C: Clock>(&mut self, registry: &ServerRegistry<C>) -> &mut ServerDraft {
        self.draft.insert(ServerDraft {
            id: None,
            fields: registry.placeholder_fields(),
        })
    }

    /// Opens an edit draft that copies the stored record, identifier included.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Registry`] wrapping `NotFound` when no record has
    /// `id`; the form state is unchanged.
    pub fn open_edit<C: Clock>(
        &mut self,
        registry: &ServerRegistry<C>,
        id: ServerId,
    ) -> Result<&mut ServerDraft, FormError> {
        let record = registry
            .find(id)
            .ok_or(ServerRegistryError::NotFound(id))?;
        Ok(self.draft.insert(ServerDraft {
            id: Some(record.id()),
            fields: record.fields().clone(),
        }))
    }

    /// Closes the form and returns the discarded draft.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotOpen`] when no draft is open.
    pub fn cancel(&mut self) -> Result<ServerDraft, FormError> {
        self.draft.take().ok_or(FormError::NotOpen)
    }

    /// Saves the open draft and closes the form.
    ///
    /// A draft whose identifier exists in `registry` updates that record;
    /// any other draft is added with a freshly allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotOpen`] when no draft is open, or
    /// [`FormError::Registry`] when the registry rejects the update or the
    /// add, in which case the draft stays open.
    pub fn save<C: Clock>(
        &mut self,
        registry: &mut ServerRegistry<C>,
    ) -> Result<SaveOutcome, FormError> {
        let draft = self.draft.take().ok_or(FormError::NotOpen)?;
        let saved = match draft.id {
            Some(id) if registry.contains(id) => registry
                .update(id, ServerPatch::from(draft.fields.clone()))
                .map(SaveOutcome::Updated),
            stale => {
                if let Some(id) = stale {
                    tracing::warn!(
                        server_id = %id,
                        "edited server no longer exists; saving draft as a new record"
                    );
                }
                registry
                    .add(draft.fields.clone())
                    .map(SaveOutcome::Added)
            }
        };
        saved.map_err(|err| {
            self.draft = Some(draft);
            err.into()
        })
    }
}
