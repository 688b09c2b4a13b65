//! The authoritative in-memory server collection.
//!
//! Provides [`ServerRegistry`], which owns the ordered record list, allocates
//! identifiers, and fires clipboard and notification side effects through the
//! optional ports attached to it.

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::Notifier;
use crate::server_registry::{
    domain::{ServerFields, ServerId, ServerPatch, ServerRecord, seed_records},
    ports::ClipboardWriter,
};

/// Errors returned by registry operations.
#[derive(Debug, Clone, Error)]
pub enum ServerRegistryError {
    /// No record has the requested identifier.
    #[error("server not found: {0}")]
    NotFound(ServerId),

    /// Two initial records share an identifier.
    #[error("duplicate server identifier: {0}")]
    DuplicateId(ServerId),

    /// An initial record uses identifier zero.
    #[error("server identifiers must be positive")]
    ZeroId,

    /// Every identifier up to `u64::MAX` has been handed out.
    #[error("no server identifiers left to allocate")]
    IdsExhausted,

    /// Initial records could not be decoded.
    #[error("invalid server list: {0}")]
    InvalidSeed(Arc<serde_json::Error>),
}

/// Result type for registry operations.
pub type ServerRegistryResult<T> = Result<T, ServerRegistryError>;

/// Insertion-ordered collection of server records.
///
/// The registry is an owned value: build one per dashboard (or per test) and
/// hand it to the presentation layer. Mutations take `&mut self`, so there is
/// exactly one writer at a time.
pub struct ServerRegistry<C = DefaultClock>
where
    C: Clock,
{
    records: Vec<ServerRecord>,
    clock: Arc<C>,
    clipboard: Option<Arc<dyn ClipboardWriter>>,
    notifier: Option<Notifier>,
    high_water: ServerId,
    last_updated: DateTime<Utc>,
}

impl<C> ServerRegistry<C>
where
    C: Clock,
{
    /// Creates an empty registry with no side-effect ports attached.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_records(Vec::new(), clock)
    }

    /// Creates a registry holding the built-in six-server catalogue.
    #[must_use]
    pub fn seeded(clock: Arc<C>) -> Self {
        Self::with_records(seed_records(), clock)
    }

    /// Creates a registry from existing records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::DuplicateId`] when two records share an
    /// identifier or [`ServerRegistryError::ZeroId`] when one uses zero.
    pub fn from_records(
        records: impl IntoIterator<Item = ServerRecord>,
        clock: Arc<C>,
    ) -> ServerRegistryResult<Self> {
        let collected: Vec<ServerRecord> = records.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        for record in &collected {
            if record.id().value() == 0 {
                return Err(ServerRegistryError::ZeroId);
            }
            if !seen.insert(record.id()) {
                return Err(ServerRegistryError::DuplicateId(record.id()));
            }
        }
        Ok(Self::with_records(collected, clock))
    }

    /// Creates a registry from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::InvalidSeed`] for malformed JSON, plus
    /// the errors of [`ServerRegistry::from_records`].
    pub fn from_json(document: &str, clock: Arc<C>) -> ServerRegistryResult<Self> {
        let records: Vec<ServerRecord> = serde_json::from_str(document)
            .map_err(|err| ServerRegistryError::InvalidSeed(Arc::new(err)))?;
        Self::from_records(records, clock)
    }

    fn with_records(records: Vec<ServerRecord>, clock: Arc<C>) -> Self {
        let high_water = records
            .iter()
            .map(ServerRecord::id)
            .max()
            .unwrap_or(ServerId::new(0));
        let last_updated = clock.utc();
        Self {
            records,
            clock,
            clipboard: None,
            notifier: None,
            high_water,
            last_updated,
        }
    }

    /// Attaches the clipboard used by [`ServerRegistry::copy_address`].
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Attaches the notification observer.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Returns every record in insertion order.
    #[must_use]
    pub fn list(&self) -> &[ServerRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn find(&self, id: ServerId) -> Option<&ServerRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns `true` when a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: ServerId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the identifier the next [`ServerRegistry::add`] will assign.
    ///
    /// This is one past the highest identifier the registry has ever held,
    /// so removing the newest record does not free its identifier. Returns
    /// `None` once `u64::MAX` has been allocated.
    #[must_use]
    pub const fn next_id(&self) -> Option<ServerId> {
        self.high_water.next()
    }

    /// Returns the add-form template for the current collection size.
    #[must_use]
    pub fn placeholder_fields(&self) -> ServerFields {
        ServerFields::placeholder(self.records.len().saturating_add(1))
    }

    /// Returns when the collection was built or last changed.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Appends a new record and returns it with its assigned identifier.
    ///
    /// The first record of a fresh empty registry gets [`ServerId::FIRST`].
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::IdsExhausted`] once `u64::MAX` has been
    /// allocated; the collection is left untouched.
    pub fn add(&mut self, fields: ServerFields) -> ServerRegistryResult<ServerRecord> {
        let id = self.next_id().ok_or(ServerRegistryError::IdsExhausted)?;
        let record = ServerRecord::new(id, fields);
        self.high_water = id;
        tracing::info!(server_id = %id, name = record.name(), "server record added");
        self.records.push(record.clone());
        self.touch();
        Ok(record)
    }

    /// Applies `patch` to the record with `id`, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::NotFound`] when no record has `id`; the
    /// collection is left untouched.
    pub fn update(&mut self, id: ServerId, patch: ServerPatch) -> ServerRegistryResult<ServerRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(ServerRegistryError::NotFound(id))?;
        record.apply(patch);
        let updated = record.clone();
        tracing::info!(server_id = %id, name = updated.name(), "server record updated");
        self.touch();
        if let Some(notifier) = &self.notifier {
            notifier.updated(&updated, self.last_updated);
        }
        Ok(updated)
    }

    /// Removes the record with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::NotFound`] when no record has `id`; the
    /// collection is left untouched.
    pub fn remove(&mut self, id: ServerId) -> ServerRegistryResult<ServerRecord> {
        let position = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(ServerRegistryError::NotFound(id))?;
        let removed = self.records.remove(position);
        tracing::info!(server_id = %id, name = removed.name(), "server record removed");
        self.touch();
        if let Some(notifier) = &self.notifier {
            notifier.deleted(&removed, self.last_updated);
        }
        Ok(removed)
    }

    /// Copies `ip` to the clipboard and confirms it.
    ///
    /// Clipboard failures are logged and otherwise ignored.
    pub fn copy_address(&self, ip: &str) {
        match &self.clipboard {
            Some(clipboard) => {
                if let Err(err) = clipboard.write_text(ip) {
                    tracing::warn!(ip, error = %err, "clipboard write failed");
                }
            }
            None => tracing::debug!(ip, "no clipboard attached; skipping write"),
        }
        if let Some(notifier) = &self.notifier {
            notifier.copied(ip, self.clock.utc());
        }
    }

    fn touch(&mut self) {
        self.last_updated = self.clock.utc();
    }
}
