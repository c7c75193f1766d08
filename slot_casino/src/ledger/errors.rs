//! Ledger error types.

use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema setup failed when opening the ledger
    #[error("Failed to prepare ledger schema: {0}")]
    Schema(String),

    /// A stored record could not be read back
    #[error("Corrupt ledger record for player {name}: {reason}")]
    CorruptRecord { name: String, reason: String },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
