//! Port contracts for the registry's side effects.
//!
//! The registry itself is pure state; copying an address and confirming a
//! change go through these infrastructure-agnostic interfaces.

pub mod clipboard;
pub mod notification;

pub use clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};
pub use notification::{
    Notification, NotificationError, NotificationKind, NotificationResult, NotificationSink,
};

#[cfg(test)]
pub use clipboard::MockClipboardWriter;
#[cfg(test)]
pub use notification::MockNotificationSink;
