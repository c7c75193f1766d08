//! Per-player mutual exclusion.
//!
//! Every read-modify-write against one player's record runs under that
//! player's lock, so two concurrent plays cannot both load the same balance.
//! Different players never contend.

use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type Slot = Arc<AsyncMutex<()>>;

/// Registry of per-name async locks
#[derive(Debug, Default)]
pub struct PlayerLocks {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl PlayerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `name`
    ///
    /// The returned guard releases the lock on drop and prunes the registry
    /// entry once nobody else is waiting on it.
    pub async fn lock(&self, name: &str) -> PlayerGuard {
        let slot = {
            let mut slots = self.slots.lock();
            slots.entry(name.to_string()).or_default().clone()
        };

        let guard = slot.lock_owned().await;

        PlayerGuard {
            name: name.to_string(),
            guard: Some(guard),
            slots: Arc::clone(&self.slots),
        }
    }

    /// Number of names with a live lock entry
    pub fn active(&self) -> usize {
        self.slots.lock().len()
    }
}

/// Exclusive access to one player's record
#[derive(Debug)]
pub struct PlayerGuard {
    name: String,
    guard: Option<OwnedMutexGuard<()>>,
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl Drop for PlayerGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        // The registry holds the last reference only when no task holds or
        // waits on the lock; new waiters must take the registry mutex first.
        let mut slots = self.slots.lock();
        if slots
            .get(&self.name)
            .is_some_and(|slot| Arc::strong_count(slot) == 1)
        {
            slots.remove(&self.name);
        }
    }
}
