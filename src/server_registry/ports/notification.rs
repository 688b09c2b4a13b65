//! Notification port for transient operator confirmations.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for notification delivery.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Which action a notification confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An address was copied to the clipboard.
    Copied,
    /// A record was updated.
    Updated,
    /// A record was deleted.
    Deleted,
}

impl NotificationKind {
    /// Returns the lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copied => "copied",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short, auto-dismissing message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    duration: Duration,
    issued_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification.
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        duration: Duration,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            duration,
            issued_at,
        }
    }

    /// Returns the confirmed action.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how long the message stays visible.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the visible duration in whole milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns when the notification was raised.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Fire-and-forget sink for operator notifications.
///
/// Sinks own their display policy: overlapping notifications may queue or
/// stack, and nothing waits for a notification to be dismissed.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when the sink rejects the message.
    fn notify(&self, notification: &Notification) -> NotificationResult<()>;
}

/// Errors returned while producing or delivering notifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The message template could not be rendered.
    #[error("failed to render {kind} notification: {reason}")]
    Render {
        /// Notification being rendered.
        kind: NotificationKind,
        /// Renderer error text.
        reason: String,
    },

    /// The sink refused or failed to display the message.
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
}
