//! In-memory clipboard that records every write.

use std::sync::{Arc, RwLock};

use crate::server_registry::ports::{ClipboardError, ClipboardResult, ClipboardWriter};

/// Thread-safe clipboard recorder for headless use and tests.
///
/// Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    writes: Arc<RwLock<Vec<String>>>,
}

impl InMemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every payload written so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when the history lock is
    /// poisoned.
    pub fn writes(&self) -> ClipboardResult<Vec<String>> {
        let writes = self
            .writes
            .read()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        Ok(writes.clone())
    }

    /// Returns the current clipboard contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when the history lock is
    /// poisoned.
    pub fn contents(&self) -> ClipboardResult<Option<String>> {
        let writes = self
            .writes
            .read()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        Ok(writes.last().cloned())
    }
}

impl ClipboardWriter for InMemoryClipboard {
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let mut writes = self
            .writes
            .write()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        writes.push(text.to_owned());
        Ok(())
    }
}
