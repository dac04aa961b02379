//! Error types for game storage.

use thiserror::Error;

/// Result type for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

/// Errors that can occur while storing or reading game records.
#[derive(Debug, Error)]
pub enum VaultError {
    /// No record matches the given id.
    #[error("no game found with id '{0}'")]
    RecordNotFound(String),

    /// An id prefix matches more than one record.
    #[error("id '{0}' matches more than one game")]
    AmbiguousId(String),

    /// A game with no rolls cannot be saved.
    #[error("cannot save a game with no rolls")]
    EmptyGame,

    /// A league size other than 2v2, 3v3, or 4v4.
    #[error("invalid league size: {0} (expected 2v2, 3v3, or 4v4)")]
    InvalidLeagueSize(String),

    /// A mode filter other than all, practice, 2v2, 3v3, or 4v4.
    #[error("invalid mode filter: {0} (expected all, practice, 2v2, 3v3, or 4v4)")]
    InvalidModeFilter(String),

    /// An edited score outside 0-300.
    #[error("invalid score: {0} (expected 0-300)")]
    InvalidScore(u32),

    /// A date not in `YYYY-MM-DD` form.
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A stored game holds frames no real game could produce.
    #[error("game '{0}' has an impossible frame layout or pin count")]
    CorruptRecord(String),

    /// Reading or writing the vault file failed.
    #[error("vault I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The vault file is not valid JSON.
    #[error("vault format error: {0}")]
    Json(#[from] serde_json::Error),
}
