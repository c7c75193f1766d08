//! Shared slot machine.

use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};

use super::{
    house_edge::{BiasedSpin, HouseEdge, play_with_bias},
    reels::ReelRng,
};

/// Slot machine shared by every concurrent play.
///
/// One generator is seeded at construction and never reseeded. Each play
/// holds the generator for all of its draws, so a play's first roll, chance
/// draw and re-roll come from one contiguous stretch of the sequence.
pub struct SlotMachine {
    rng: Mutex<Box<dyn ReelRng + Send>>,
    edge: HouseEdge,
}

impl SlotMachine {
    /// Machine seeded from OS entropy with the default house edge
    pub fn new() -> Self {
        Self::with_house_edge(HouseEdge::default())
    }

    /// Machine seeded from OS entropy with a custom house edge
    pub fn with_house_edge(edge: HouseEdge) -> Self {
        Self::with_rng(StdRng::from_os_rng(), edge)
    }

    /// Reproducible machine for simulations and tests
    pub fn seeded(seed: u64, edge: HouseEdge) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), edge)
    }

    /// Machine drawing from a caller-supplied source
    pub fn with_rng<R>(rng: R, edge: HouseEdge) -> Self
    where
        R: ReelRng + Send + 'static,
    {
        Self {
            rng: Mutex::new(Box::new(rng)),
            edge,
        }
    }

    pub fn house_edge(&self) -> &HouseEdge {
        &self.edge
    }

    /// Resolve one play for a player currently holding `balance`
    pub fn play(&self, balance: i64) -> BiasedSpin {
        let mut rng = self.rng.lock();
        play_with_bias(&mut **rng, &self.edge, balance)
    }
}

impl Default for SlotMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SlotMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotMachine")
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}
