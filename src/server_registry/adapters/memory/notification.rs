//! In-memory notification sink that keeps every delivered message.

use std::sync::{Arc, RwLock};

use crate::server_registry::ports::{
    Notification, NotificationError, NotificationResult, NotificationSink,
};

/// Thread-safe notification recorder. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationSink {
    delivered: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification delivered so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Unavailable`] when the history lock is
    /// poisoned.
    pub fn notifications(&self) -> NotificationResult<Vec<Notification>> {
        let delivered = self
            .delivered
            .read()
            .map_err(|err| NotificationError::Unavailable(err.to_string()))?;
        Ok(delivered.clone())
    }

    /// Returns the rendered messages, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Unavailable`] when the history lock is
    /// poisoned.
    pub fn messages(&self) -> NotificationResult<Vec<String>> {
        Ok(self
            .notifications()?
            .iter()
            .map(|notification| notification.message().to_owned())
            .collect())
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn notify(&self, notification: &Notification) -> NotificationResult<()> {
        let mut delivered = self
            .delivered
            .write()
            .map_err(|err| NotificationError::Unavailable(err.to_string()))?;
        delivered.push(notification.clone());
        Ok(())
    }
}
