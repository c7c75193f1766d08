//! Casino data models.

use serde::{Deserialize, Serialize};

use crate::slots::Reels;

/// A registered player and their credit balance.
///
/// The balance is private: every change goes through [`Player::credit`],
/// [`Player::debit`] or [`Player::cashout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: i64,
}

impl Player {
    /// Credits granted to a player on first entry
    pub const INITIAL_BALANCE: i64 = 10;

    /// New player holding [`Player::INITIAL_BALANCE`]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_balance(name, Self::INITIAL_BALANCE)
    }

    /// Player with an explicit starting balance
    pub fn with_balance(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add winnings. No upper bound.
    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Take a stake. Does not check sufficiency; the coordinator validates
    /// the bet before calling this.
    pub fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    /// Drain the balance to zero. Read [`Player::balance`] first to know
    /// what was paid out.
    pub fn cashout(&mut self) {
        self.balance = 0;
    }
}

/// Result of entering the casino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterOutcome {
    pub balance: i64,
    /// `false` when the name already had a record
    pub newly_registered: bool,
}

/// Result of leaving the casino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LeaveOutcome {
    /// Credit remains; the record is kept for a later return
    Kept { balance: i64 },
    /// Balance was zero; the record was deleted
    Removed,
}

/// Result of one play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub slots: Reels,
    pub bet: i64,
    pub payout: i64,
    /// Balance after the play was applied
    pub balance: i64,
    /// Whether a winning first roll was discarded
    pub rerolled: bool,
}

impl PlayOutcome {
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_initial_balance() {
        let player = Player::new("alice");
        assert_eq!(player.name(), "alice");
        assert_eq!(player.balance(), 10);
    }

    #[test]
    fn test_credit_debit_cashout() {
        let mut player = Player::with_balance("bob", 25);
        player.credit(40);
        assert_eq!(player.balance(), 65);
        player.debit(5);
        assert_eq!(player.balance(), 60);
        player.cashout();
        assert_eq!(player.balance(), 0);
    }

    #[test]
    fn test_debit_may_go_negative() {
        let mut player = Player::with_balance("eve", 1);
        player.debit(3);
        assert_eq!(player.balance(), -2);
    }

    #[test]
    fn test_leave_outcome_serializes_tagged() {
        let kept = serde_json::to_value(LeaveOutcome::Kept { balance: 5 }).unwrap();
        assert_eq!(kept["status"], "kept");
        assert_eq!(kept["balance"], 5);
    }
}
