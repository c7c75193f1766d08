//! Volatile in-process ledger.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{LedgerStore, errors::LedgerResult};
use crate::casino::Player;

/// `LedgerStore` backed by a hash map.
///
/// Nothing survives a restart; useful for tests and throwaway servers.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    players: RwLock<HashMap<String, Player>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn get(&self, name: &str) -> LedgerResult<Option<Player>> {
        Ok(self.players.read().get(name).cloned())
    }

    async fn upsert(&self, player: &Player) -> LedgerResult<()> {
        self.players
            .write()
            .insert(player.name().to_string(), player.clone());
        Ok(())
    }

    async fn remove(&self, name: &str) -> LedgerResult<bool> {
        Ok(self.players.write().remove(name).is_some())
    }

    async fn health_check(&self) -> LedgerResult<()> {
        Ok(())
    }
}
