//! Error types for pointlog-core.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pointlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Ledger store errors
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Settings errors
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ledger store errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected a valid YYYY-MM-DD calendar date")]
    InvalidDate(String),

    /// The points magnitude is not a non-negative integer.
    #[error("invalid amount '{0}': expected a non-negative integer")]
    InvalidAmount(String),

    /// Failed to open the database file.
    #[error("failed to open ledger at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Underlying SQLite failure. Prior state is unchanged.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Diagnostic integrity check did not pass.
    #[error("integrity check failed: {0}")]
    Integrity(String),
}

/// Settings errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to load settings
    #[error("failed to load settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save settings
    #[error("failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key is not a recognized option
    #[error("unknown settings key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed for the given key
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
