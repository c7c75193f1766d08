//! Slot engine: three reels of four symbols, a three-of-a-kind paytable and
//! the house-edge re-roll policy.
//!
//! ## Example
//!
//! ```
//! use slot_casino::slots::{HouseEdge, SlotMachine};
//!
//! let machine = SlotMachine::seeded(7, HouseEdge::default());
//! let result = machine.play(10);
//! assert_eq!(result.spin.payout, slot_casino::slots::payout(&result.spin.outcome));
//! ```

pub mod house_edge;
pub mod machine;
pub mod reels;

pub use house_edge::{BiasedSpin, HouseEdge, play_with_bias};
pub use machine::SlotMachine;
pub use reels::{PAYOUT_MULTIPLE, REEL_COUNT, ReelRng, Reels, SYMBOL_COUNT, Spin, payout, roll};
