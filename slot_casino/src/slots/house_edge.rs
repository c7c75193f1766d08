//! House-edge re-roll policy.
//!
//! A winning first roll may be thrown away and replaced by a second roll,
//! with a probability that depends on the player's balance. The second roll
//! stands whatever it shows. Losing rolls are never re-rolled.

use serde::{Deserialize, Serialize};

use super::reels::{ReelRng, Spin, roll};

/// Balance bands and re-roll probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseEdge {
    /// Lowest balance (inclusive) of the middle band
    pub mid_band_floor: i64,
    /// Highest balance (inclusive) of the middle band
    pub mid_band_ceiling: i64,
    /// Re-roll probability for balances in the middle band
    pub mid_band_reroll: f64,
    /// Re-roll probability for balances above the middle band
    pub high_band_reroll: f64,
}

impl Default for HouseEdge {
    fn default() -> Self {
        Self {
            mid_band_floor: 40,
            mid_band_ceiling: 60,
            mid_band_reroll: 0.3,
            high_band_reroll: 0.6,
        }
    }
}

impl HouseEdge {
    /// A fair machine that never re-rolls
    pub fn none() -> Self {
        Self {
            mid_band_reroll: 0.0,
            high_band_reroll: 0.0,
            ..Self::default()
        }
    }

    /// Probability of discarding a win for a player holding `balance`.
    /// `None` below the middle band.
    pub fn reroll_chance(&self, balance: i64) -> Option<f64> {
        if (self.mid_band_floor..=self.mid_band_ceiling).contains(&balance) {
            Some(self.mid_band_reroll)
        } else if balance > self.mid_band_ceiling {
            Some(self.high_band_reroll)
        } else {
            None
        }
    }
}

/// Outcome of a play after the house edge was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiasedSpin {
    pub spin: Spin,
    pub rerolled: bool,
}

/// Roll once; when the roll wins, maybe discard it and roll exactly once more.
///
/// The chance draw happens only for a winning roll in a band that has a
/// re-roll probability, so losing plays consume exactly one roll of draws.
pub fn play_with_bias<R: ReelRng + ?Sized>(
    rng: &mut R,
    edge: &HouseEdge,
    balance: i64,
) -> BiasedSpin {
    let first = roll(rng);
    if !first.is_win() {
        return BiasedSpin {
            spin: first,
            rerolled: false,
        };
    }

    match edge.reroll_chance(balance) {
        Some(chance) if rng.chance() < chance => BiasedSpin {
            spin: roll(rng),
            rerolled: true,
        },
        _ => BiasedSpin {
            spin: first,
            rerolled: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed symbols and chance values, panicking when exhausted.
    struct Script {
        symbols: VecDeque<u8>,
        chances: VecDeque<f64>,
    }

    impl Script {
        fn new(symbols: &[u8], chances: &[f64]) -> Self {
            Self {
                symbols: symbols.iter().copied().collect(),
                chances: chances.iter().copied().collect(),
            }
        }

        fn exhausted(&self) -> bool {
            self.symbols.is_empty() && self.chances.is_empty()
        }
    }

    impl ReelRng for Script {
        fn symbol(&mut self) -> u8 {
            self.symbols.pop_front().expect("script ran out of symbols")
        }

        fn chance(&mut self) -> f64 {
            self.chances.pop_front().expect("script ran out of chances")
        }
    }

    #[test]
    fn test_band_boundaries() {
        let edge = HouseEdge::default();
        assert_eq!(edge.reroll_chance(39), None);
        assert_eq!(edge.reroll_chance(40), Some(0.3));
        assert_eq!(edge.reroll_chance(60), Some(0.3));
        assert_eq!(edge.reroll_chance(61), Some(0.6));
        assert_eq!(edge.reroll_chance(-5), None);
    }

    #[test]
    fn test_losing_roll_is_never_rerolled() {
        let mut script = Script::new(&[0, 1, 1], &[]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 100);
        assert!(!result.rerolled);
        assert_eq!(result.spin.payout, 0);
        assert!(script.exhausted());
    }

    #[test]
    fn test_low_balance_keeps_win_without_chance_draw() {
        let mut script = Script::new(&[2, 2, 2], &[]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 39);
        assert!(!result.rerolled);
        assert_eq!(result.spin.payout, 30);
        assert!(script.exhausted());
    }

    #[test]
    fn test_mid_band_rerolls_below_threshold() {
        let mut script = Script::new(&[3, 3, 3, 0, 1, 2], &[0.29]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 50);
        assert!(result.rerolled);
        assert_eq!(result.spin.outcome, [0, 1, 2]);
        assert_eq!(result.spin.payout, 0);
        assert!(script.exhausted());
    }

    #[test]
    fn test_mid_band_keeps_win_at_threshold() {
        let mut script = Script::new(&[3, 3, 3], &[0.3]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 40);
        assert!(!result.rerolled);
        assert_eq!(result.spin.payout, 40);
    }

    #[test]
    fn test_high_band_uses_higher_chance() {
        let mut script = Script::new(&[1, 1, 1, 1, 1, 0], &[0.59]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 61);
        assert!(result.rerolled);
        assert_eq!(result.spin.payout, 0);

        let mut script = Script::new(&[1, 1, 1], &[0.61]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 61);
        assert!(!result.rerolled);
        assert_eq!(result.spin.payout, 20);
    }

    #[test]
    fn test_second_win_stands_and_no_third_roll() {
        let mut script = Script::new(&[0, 0, 0, 3, 3, 3], &[0.0]);
        let result = play_with_bias(&mut script, &HouseEdge::default(), 500);
        assert!(result.rerolled);
        assert_eq!(result.spin.payout, 40);
        assert!(script.exhausted());
    }

    #[test]
    fn test_fair_machine_never_rerolls() {
        let mut script = Script::new(&[2, 2, 2], &[0.0]);
        let result = play_with_bias(&mut script, &HouseEdge::none(), 100);
        assert!(!result.rerolled);
        assert_eq!(result.spin.payout, 30);
    }
}
