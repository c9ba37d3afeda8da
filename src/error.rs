//! Error types for the minutes editing engine.

use std::fmt;

/// Result type alias for minutes editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for minutes editor operations.
///
/// Editing itself never errors: selection misses, unsupported commands, and
/// boundary undo/redo all degrade to no-ops. Errors only arise at the edges,
/// when parsing host-supplied values.
#[derive(Debug)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Unknown export format selector.
    InvalidExportFormat(String),
    /// Malformed minutes JSON payload.
    MinutesJson(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidExportFormat(s) => write!(f, "unknown export format: {s}"),
            Self::MinutesJson(e) => write!(f, "malformed minutes payload: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MinutesJson(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MinutesJson(e)
    }
}
