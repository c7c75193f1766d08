//! Ledger module providing durable player storage on an embedded SQLite file.
//!
//! This module manages the connection pool using sqlx and the `players` table
//! that holds one `{name, balance}` row per registered player. Writes are
//! committed with `synchronous = FULL`, so an acknowledged upsert survives a
//! process crash.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::time::Duration;

pub mod config;
pub mod errors;
pub mod memory;
pub mod repository;

pub use config::LedgerConfig;
pub use errors::{LedgerError, LedgerResult};
pub use memory::MemoryLedger;
pub use repository::{LedgerStore, SqliteLedger};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS players (
    name    TEXT PRIMARY KEY NOT NULL,
    balance INTEGER NOT NULL
)";

/// Ledger connection pool wrapper
#[derive(Clone)]
pub struct Ledger {
    pool: SqlitePool,
}

impl Ledger {
    /// Open (or create) the ledger file and make sure the schema exists
    ///
    /// # Arguments
    ///
    /// * `config` - Ledger configuration
    ///
    /// # Returns
    ///
    /// * `LedgerResult<Ledger>` - Ledger instance or error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use slot_casino::ledger::{Ledger, LedgerConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), slot_casino::ledger::LedgerError> {
    ///     let ledger = Ledger::open(&LedgerConfig::from_env()).await?;
    ///     ledger.health_check().await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn open(config: &LedgerConfig) -> LedgerResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| LedgerError::Schema(e.to_string()))?;

        log::info!("Ledger opened at {}", config.path.display());

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check if the ledger file is reachable
    pub async fn health_check(&self) -> LedgerResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool, flushing outstanding WAL state
    pub async fn close(self) {
        self.pool.close().await;
    }
}
