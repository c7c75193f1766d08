//! Ledger store trait and its SQLite implementation.
//!
//! The trait keeps the casino coordinator independent of the storage engine so
//! tests and throwaway servers can run against [`super::MemoryLedger`].

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::{
    Ledger,
    errors::{LedgerError, LedgerResult},
};
use crate::casino::Player;

/// Durable mapping from player name to player record.
///
/// Implementations must be safe to call concurrently. They provide no
/// atomicity across calls; callers serialize read-modify-write sequences.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetch the record for `name`; `None` when no record exists
    async fn get(&self, name: &str) -> LedgerResult<Option<Player>>;

    /// Insert or overwrite the record for `player.name()`
    async fn upsert(&self, player: &Player) -> LedgerResult<()>;

    /// Delete the record for `name`, returning whether one existed
    async fn remove(&self, name: &str) -> LedgerResult<bool>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> LedgerResult<()>;
}

/// SQLite implementation of `LedgerStore`
#[derive(Clone)]
pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl From<Ledger> for SqliteLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger.pool().clone())
    }
}

#[async_trait]
impl LedgerStore for SqliteLedger {
    async fn get(&self, name: &str) -> LedgerResult<Option<Player>> {
        let row = sqlx::query("SELECT name, balance FROM players WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| decode_player(&row))
            .transpose()
            .map_err(|e| LedgerError::CorruptRecord {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    async fn upsert(&self, player: &Player) -> LedgerResult<()> {
        sqlx::query(
            "INSERT INTO players (name, balance) VALUES (?1, ?2)
             ON CONFLICT (name) DO UPDATE SET balance = excluded.balance",
        )
        .bind(player.name())
        .bind(player.balance())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, name: &str) -> LedgerResult<bool> {
        let result = sqlx::query("DELETE FROM players WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> LedgerResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn decode_player(row: &sqlx::sqlite::SqliteRow) -> Result<Player, sqlx::Error> {
    let name: String = row.try_get("name")?;
    let balance: i64 = row.try_get("balance")?;
    Ok(Player::with_balance(name, balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerConfig;

    async fn open_temp() -> (SqliteLedger, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let ledger = Ledger::open(&LedgerConfig::at(dir.path().join("players.db")))
            .await
            .expect("Failed to open ledger");
        (SqliteLedger::from(ledger), dir)
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let (store, _dir) = open_temp().await;
        assert_eq!(store.get("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_overwrites() {
        let (store, _dir) = open_temp().await;

        store.upsert(&Player::new("alice")).await.unwrap();
        store
            .upsert(&Player::with_balance("alice", 42))
            .await
            .unwrap();

        let alice = store.get("alice").await.unwrap().unwrap();
        assert_eq!(alice.balance(), 42);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (store, _dir) = open_temp().await;
        store.upsert(&Player::new("bob")).await.unwrap();

        assert!(store.remove("bob").await.unwrap());
        assert!(!store.remove("bob").await.unwrap());
        assert_eq!(store.get("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_negative_balance_round_trips() {
        let (store, _dir) = open_temp().await;
        store
            .upsert(&Player::with_balance("eve", -3))
            .await
            .unwrap();
        assert_eq!(store.get("eve").await.unwrap().unwrap().balance(), -3);
    }
}
