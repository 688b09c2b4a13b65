//! Error types for server domain parsing.

use thiserror::Error;

/// Error returned while parsing a server status from form input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown server status: {0} (expected online or offline)")]
pub struct ParseServerStatusError(pub String);
