//! Casino error types.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Casino errors
///
/// Everything except `StorageUnavailable` is an expected decline. A storage
/// failure aborts only the current request; nothing after the failing store
/// call ran, so callers may retry.
#[derive(Debug, Error)]
pub enum CasinoError {
    /// No ledger record for this name
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Malformed request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Balance cannot cover the bet
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: i64, required: i64 },

    /// The ledger could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] LedgerError),
}

impl CasinoError {
    /// Get a client-safe error message
    ///
    /// Storage errors are reduced to a generic retry hint so file paths and
    /// SQL details stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            CasinoError::PlayerNotFound(_) => "Player not found.".to_string(),
            CasinoError::InsufficientBalance { .. } => "Insufficient balance.".to_string(),
            CasinoError::StorageUnavailable(_) => {
                "Ledger temporarily unavailable, try again later.".to_string()
            }
            CasinoError::InvalidInput(_) => self.to_string(),
        }
    }

    /// Whether retrying the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, CasinoError::StorageUnavailable(_))
    }
}

/// Result type for casino operations
pub type CasinoResult<T> = Result<T, CasinoError>;
