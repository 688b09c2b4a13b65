//! Clipboard adapter using the OSC 52 terminal escape sequence.
//!
//! Terminal emulators that support OSC 52 place the decoded payload on the
//! system clipboard, which works over SSH without any platform bindings.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;
use std::sync::Mutex;

use crate::server_registry::ports::{ClipboardError, ClipboardResult, ClipboardWriter};

/// Writes OSC 52 clipboard sequences to a terminal stream.
#[derive(Debug)]
pub struct TerminalClipboard<W> {
    out: Mutex<W>,
}

impl<W> TerminalClipboard<W>
where
    W: Write + Send,
{
    /// Wraps the terminal output stream.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the wrapped stream.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when the stream lock is
    /// poisoned.
    pub fn into_inner(self) -> ClipboardResult<W> {
        self.out
            .into_inner()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

/// Builds the escape sequence that sets the clipboard to `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))
}

impl<W> ClipboardWriter for TerminalClipboard<W>
where
    W: Write + Send,
{
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .map_err(ClipboardError::write)?;
        out.flush().map_err(ClipboardError::write)
    }
}
