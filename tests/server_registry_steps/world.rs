//! Shared world state for server registry BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serverboard::server_registry::{
    adapters::memory::{InMemoryClipboard, InMemoryNotificationSink},
    domain::ServerRecord,
    services::{
        FormError, Notifier, SaveOutcome, ServerForm, ServerRegistry, ServerRegistryError,
    },
};
use serverboard::settings::DashboardSettings;

/// Scenario world for server registry behaviour tests.
pub struct RegistryWorld {
    /// The registry under test.
    pub registry: ServerRegistry<DefaultClock>,
    /// The add/edit form dialog.
    pub form: ServerForm,
    /// Clipboard attached to the registry.
    pub clipboard: InMemoryClipboard,
    /// Notification sink attached to the registry.
    pub sink: InMemoryNotificationSink,
    /// Result of the last fallible registry operation.
    pub last_result: Option<Result<ServerRecord, ServerRegistryError>>,
    /// Result of the last form save.
    pub last_save: Option<Result<SaveOutcome, FormError>>,
}

impl RegistryWorld {
    /// Creates a world around an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::around(ServerRegistry::new(Arc::new(DefaultClock)))
    }

    /// Replaces the registry with the seeded catalogue.
    pub fn reseed(&mut self) {
        let registry = ServerRegistry::seeded(Arc::new(DefaultClock));
        *self = Self::around(registry);
    }

    fn around(base: ServerRegistry<DefaultClock>) -> Self {
        let clipboard = InMemoryClipboard::new();
        let sink = InMemoryNotificationSink::new();
        let registry = base
            .with_clipboard(Arc::new(clipboard.clone()))
            .with_notifier(Notifier::new(
                Arc::new(sink.clone()),
                DashboardSettings::default(),
            ));
        Self {
            registry,
            form: ServerForm::new(),
            clipboard,
            sink,
            last_result: None,
            last_save: None,
        }
    }
}

impl Default for RegistryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}
