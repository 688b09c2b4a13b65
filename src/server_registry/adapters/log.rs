//! Notification sink that writes to the `tracing` pipeline.

use crate::server_registry::ports::{Notification, NotificationResult, NotificationSink};

/// Emits each notification as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: &Notification) -> NotificationResult<()> {
        tracing::info!(
            kind = %notification.kind(),
            duration_ms = notification.duration_ms(),
            "{}",
            notification.message()
        );
        Ok(())
    }
}
