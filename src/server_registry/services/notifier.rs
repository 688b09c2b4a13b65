//! Renders and delivers operator confirmations.

use chrono::{DateTime, Utc};
use minijinja::{Environment, Value, context};
use std::sync::Arc;

use crate::server_registry::domain::ServerRecord;
use crate::server_registry::ports::{
    Notification, NotificationError, NotificationKind, NotificationSink,
};
use crate::settings::DashboardSettings;

/// Observer that turns registry events into notifications.
///
/// Delivery is best effort: a template or sink failure is logged and the
/// notification is dropped, never failing the action that triggered it.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    settings: DashboardSettings,
}

impl Notifier {
    /// Creates a notifier delivering to `sink` with the given wording and
    /// display duration.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>, settings: DashboardSettings) -> Self {
        Self { sink, settings }
    }

    /// Returns the settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Confirms that `ip` was copied.
    pub fn copied(&self, ip: &str, issued_at: DateTime<Utc>) {
        let template = &self.settings.templates.copied;
        self.emit(NotificationKind::Copied, template, context! { ip => ip }, issued_at);
    }

    /// Confirms that `record` was updated.
    pub fn updated(&self, record: &ServerRecord, issued_at: DateTime<Utc>) {
        let template = &self.settings.templates.updated;
        self.emit(
            NotificationKind::Updated,
            template,
            record_context(record),
            issued_at,
        );
    }

    /// Confirms that `record` was deleted.
    pub fn deleted(&self, record: &ServerRecord, issued_at: DateTime<Utc>) {
        let template = &self.settings.templates.deleted;
        self.emit(
            NotificationKind::Deleted,
            template,
            record_context(record),
            issued_at,
        );
    }

    fn emit(&self, kind: NotificationKind, template: &str, ctx: Value, issued_at: DateTime<Utc>) {
        if !self.settings.notifications_enabled {
            tracing::debug!(%kind, "notifications disabled; skipping");
            return;
        }
        let delivered = render(kind, template, ctx).and_then(|message| {
            let notification = Notification::new(
                kind,
                message,
                self.settings.notification_duration(),
                issued_at,
            );
            self.sink.notify(&notification)
        });
        if let Err(err) = delivered {
            tracing::warn!(%kind, error = %err, "dropping notification");
        }
    }
}

fn record_context(record: &ServerRecord) -> Value {
    context! {
        id => record.id().value(),
        name => record.name(),
        ip => record.ip(),
    }
}

fn render(kind: NotificationKind, template: &str, ctx: Value) -> Result<String, NotificationError> {
    Environment::new()
        .render_str(template, ctx)
        .map_err(|err| NotificationError::Render {
            kind,
            reason: err.to_string(),
        })
}
