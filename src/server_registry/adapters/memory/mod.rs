//! In-memory adapter implementations.
//!
//! These adapters record what the registry asked for so that tests and
//! headless callers can inspect side effects without a terminal or UI.

mod clipboard;
mod notification;

pub use clipboard::InMemoryClipboard;
pub use notification::InMemoryNotificationSink;
