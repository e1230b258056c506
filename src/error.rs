//! Error Types

use thiserror::Error;

/// Failure to load the catalog configuration. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("could not fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("server answered {status} for {path}")]
    Status { path: String, status: u16 },
    #[error("malformed configuration: {0}")]
    Parse(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure of an exporter. Recoverable; the user may retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("clipboard is not available in this browser")]
    ClipboardUnavailable,
    #[error("clipboard write was rejected: {0}")]
    ClipboardRejected(String),
}

/// Rejected list edit or view transition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("no list entry with id {0}")]
    UnknownEntry(u32),
    #[error("unit {0:?} is not one of the configured units")]
    UnknownUnit(String),
    #[error("select at least one item first")]
    NothingSelected,
}
