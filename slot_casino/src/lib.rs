//! # Slot Casino
//!
//! A player ledger and slot-machine resolution engine.
//!
//! Players enter with a starting credit, stake credits on a three-reel slot
//! machine, and cash out or leave. Every balance lives in a durable ledger
//! file; the server keeps no authoritative state in memory.
//!
//! ## Core Modules
//!
//! - [`ledger`]: Durable `{name, balance}` records on an embedded SQLite file
//! - [`casino`]: Player entity, errors and the per-request coordinator
//! - [`slots`]: Reels, paytable and the house-edge re-roll policy
//!
//! ## Example
//!
//! ```no_run
//! use slot_casino::{CasinoManager, ledger::{Ledger, LedgerConfig, SqliteLedger}};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ledger = Ledger::open(&LedgerConfig::from_env()).await?;
//!     let casino = CasinoManager::new(Arc::new(SqliteLedger::from(ledger)));
//!     casino.enter("alice").await?;
//!     Ok(())
//! }
//! ```

/// Durable player storage.
pub mod ledger;

/// Players, credit transitions and request coordination.
pub mod casino;
pub use casino::{CasinoError, CasinoManager, CasinoResult, DEFAULT_BET, Player};

/// Slot engine.
pub mod slots;
pub use slots::{HouseEdge, SlotMachine};
