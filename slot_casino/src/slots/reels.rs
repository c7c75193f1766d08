//! Reel draws and the paytable.

use rand::{Rng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Number of reels on the machine
pub const REEL_COUNT: usize = 3;

/// Distinct symbols per reel, identified `0..SYMBOL_COUNT`
pub const SYMBOL_COUNT: u8 = 4;

/// Credits per symbol rank for three of a kind
pub const PAYOUT_MULTIPLE: i64 = 10;

/// Symbols showing on the reels, left to right
pub type Reels = [u8; REEL_COUNT];

/// Source of reel randomness.
///
/// Implemented for [`StdRng`]; tests implement it to script exact draws.
pub trait ReelRng {
    /// A uniformly distributed symbol in `0..SYMBOL_COUNT`
    fn symbol(&mut self) -> u8;

    /// A uniformly distributed value in `[0, 1)`
    fn chance(&mut self) -> f64;
}

impl ReelRng for StdRng {
    fn symbol(&mut self) -> u8 {
        self.random_range(0..SYMBOL_COUNT)
    }

    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// One resolved spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spin {
    pub outcome: Reels,
    pub payout: i64,
}

impl Spin {
    /// Evaluate `outcome` against the paytable
    pub fn new(outcome: Reels) -> Self {
        Self {
            outcome,
            payout: payout(&outcome),
        }
    }

    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Paytable: three of a kind pays `(symbol + 1) * PAYOUT_MULTIPLE`, anything
/// else pays nothing.
pub fn payout(outcome: &Reels) -> i64 {
    let [first, rest @ ..] = outcome;
    if rest.iter().all(|symbol| symbol == first) {
        (i64::from(*first) + 1) * PAYOUT_MULTIPLE
    } else {
        0
    }
}

/// Draw every reel independently and evaluate the result
pub fn roll<R: ReelRng + ?Sized>(rng: &mut R) -> Spin {
    let mut outcome = [0; REEL_COUNT];
    for reel in &mut outcome {
        *reel = rng.symbol();
    }
    Spin::new(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_paytable_is_complete() {
        for a in 0..SYMBOL_COUNT {
            for b in 0..SYMBOL_COUNT {
                for c in 0..SYMBOL_COUNT {
                    let expected = if a == b && b == c {
                        (i64::from(a) + 1) * 10
                    } else {
                        0
                    };
                    assert_eq!(payout(&[a, b, c]), expected, "reels {a} {b} {c}");
                }
            }
        }
    }

    #[test]
    fn test_payout_range() {
        assert_eq!(payout(&[0, 0, 0]), 10);
        assert_eq!(payout(&[3, 3, 3]), 40);
        assert_eq!(payout(&[2, 2, 1]), 0);
        assert_eq!(payout(&[0, 1, 2]), 0);
    }

    #[test]
    fn test_roll_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let spin = roll(&mut rng);
            assert!(spin.outcome.iter().all(|&s| s < SYMBOL_COUNT));
            assert_eq!(spin.payout, payout(&spin.outcome));
        }
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(roll(&mut a), roll(&mut b));
        }
    }
}
