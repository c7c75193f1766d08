//! Casino module: players, their credit transitions and the per-request
//! coordinator that ties ledger and slot machine together.
//!
//! ## Example
//!
//! ```
//! use slot_casino::casino::CasinoManager;
//! use slot_casino::ledger::MemoryLedger;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), slot_casino::casino::CasinoError> {
//!     let casino = CasinoManager::new(Arc::new(MemoryLedger::new()));
//!
//!     casino.enter("alice").await?;
//!     let outcome = casino.play("alice", 1).await?;
//!     println!("{:?} -> {} credits", outcome.slots, outcome.balance);
//!
//!     let paid = casino.cashout("alice").await?;
//!     println!("Paid out {paid}");
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod locks;
pub mod manager;
pub mod models;

pub use errors::{CasinoError, CasinoResult};
pub use locks::{PlayerGuard, PlayerLocks};
pub use manager::{CasinoManager, DEFAULT_BET};
pub use models::{EnterOutcome, LeaveOutcome, PlayOutcome, Player};
