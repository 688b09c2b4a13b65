//! Adapter implementations for the registry ports.

pub mod log;
pub mod memory;
pub mod terminal;

pub use log::TracingNotificationSink;
pub use terminal::TerminalClipboard;
