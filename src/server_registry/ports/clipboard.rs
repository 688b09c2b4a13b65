//! Clipboard port used by the copy-address action.

use std::sync::Arc;
use thiserror::Error;

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Write-only access to the platform clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    /// Places `text` on the clipboard verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the adapter cannot reach the clipboard.
    fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Errors returned by clipboard adapters.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// The clipboard cannot be reached.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing the payload failed.
    #[error("clipboard write failed: {0}")]
    Write(Arc<std::io::Error>),
}

impl ClipboardError {
    /// Wraps an I/O error raised while writing the payload.
    #[must_use]
    pub fn write(err: std::io::Error) -> Self {
        Self::Write(Arc::new(err))
    }
}
