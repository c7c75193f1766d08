//! Casino manager coordinating ledger, player and slot machine per request.

use std::sync::Arc;

use super::{
    errors::{CasinoError, CasinoResult},
    locks::PlayerLocks,
    models::{EnterOutcome, LeaveOutcome, PlayOutcome, Player},
};
use crate::{ledger::LedgerStore, slots::SlotMachine};

/// Default stake for a play when the caller does not name one
pub const DEFAULT_BET: i64 = 1;

/// Casino manager
///
/// Each operation loads a private copy of the player from the ledger,
/// mutates it, writes it back and discards it. Operations that write take
/// the player's lock for the whole load-compute-persist sequence.
pub struct CasinoManager {
    ledger: Arc<dyn LedgerStore>,
    machine: SlotMachine,
    locks: PlayerLocks,
    initial_balance: i64,
}

impl CasinoManager {
    /// Create a new casino manager
    ///
    /// # Arguments
    ///
    /// * `ledger` - Player record store
    ///
    /// # Returns
    ///
    /// * `CasinoManager` - Manager with an entropy-seeded machine and the
    ///   default initial balance
    pub fn new(ledger: Arc<dyn LedgerStore>) -> Self {
        Self {
            ledger,
            machine: SlotMachine::new(),
            locks: PlayerLocks::new(),
            initial_balance: Player::INITIAL_BALANCE,
        }
    }

    /// Replace the slot machine
    pub fn with_machine(mut self, machine: SlotMachine) -> Self {
        self.machine = machine;
        self
    }

    /// Override the balance granted to newly entered players
    pub fn with_initial_balance(mut self, initial_balance: i64) -> Self {
        self.initial_balance = initial_balance;
        self
    }

    pub fn initial_balance(&self) -> i64 {
        self.initial_balance
    }

    pub fn machine(&self) -> &SlotMachine {
        &self.machine
    }

    /// Register `name` if unknown
    ///
    /// Entering with an existing name leaves its balance untouched.
    ///
    /// # Errors
    ///
    /// * `CasinoError::InvalidInput` - Empty name
    /// * `CasinoError::StorageUnavailable` - Ledger failure
    pub async fn enter(&self, name: &str) -> CasinoResult<EnterOutcome> {
        validate_name(name)?;
        let _guard = self.locks.lock(name).await;

        if let Some(player) = self.ledger.get(name).await? {
            log::debug!("{name} re-entered with {} credits", player.balance());
            return Ok(EnterOutcome {
                balance: player.balance(),
                newly_registered: false,
            });
        }

        let player = Player::with_balance(name, self.initial_balance);
        self.ledger.upsert(&player).await?;
        log::info!("{name} entered the casino with {} credits", player.balance());

        Ok(EnterOutcome {
            balance: player.balance(),
            newly_registered: true,
        })
    }

    /// Play one spin staking `bet`
    ///
    /// A win credits the payout and keeps the stake; a loss debits the stake.
    /// Input is validated before the ledger is read, so an empty name or a
    /// non-positive bet is `InvalidInput` even for an unknown player.
    ///
    /// # Errors
    ///
    /// * `CasinoError::InvalidInput` - Empty name or non-positive bet
    /// * `CasinoError::PlayerNotFound` - No record for `name`
    /// * `CasinoError::InsufficientBalance` - Balance is not positive or below `bet`
    /// * `CasinoError::StorageUnavailable` - Ledger failure; nothing was persisted
    pub async fn play(&self, name: &str, bet: i64) -> CasinoResult<PlayOutcome> {
        validate_name(name)?;
        if bet <= 0 {
            return Err(CasinoError::InvalidInput(format!(
                "bet must be positive, got {bet}"
            )));
        }

        let _guard = self.locks.lock(name).await;

        let mut player = self.load(name).await?;
        let available = player.balance();
        if available <= 0 || bet > available {
            return Err(CasinoError::InsufficientBalance {
                available,
                required: bet,
            });
        }

        let result = self.machine.play(available);
        let spin = result.spin;

        if spin.is_win() {
            player.credit(spin.payout);
        } else {
            player.debit(bet);
        }

        self.ledger.upsert(&player).await?;

        log::debug!(
            "{name} played {bet}: {:?} payout {} (rerolled: {}) -> {}",
            spin.outcome,
            spin.payout,
            result.rerolled,
            player.balance()
        );

        Ok(PlayOutcome {
            slots: spin.outcome,
            bet,
            payout: spin.payout,
            balance: player.balance(),
            rerolled: result.rerolled,
        })
    }

    /// Current balance of `name`
    ///
    /// # Errors
    ///
    /// * `CasinoError::PlayerNotFound` - No record for `name`
    pub async fn balance(&self, name: &str) -> CasinoResult<i64> {
        validate_name(name)?;
        Ok(self.load(name).await?.balance())
    }

    /// Pay out the whole balance and delete the record
    ///
    /// # Returns
    ///
    /// * `CasinoResult<i64>` - Amount paid out
    ///
    /// # Errors
    ///
    /// * `CasinoError::PlayerNotFound` - No record for `name`
    pub async fn cashout(&self, name: &str) -> CasinoResult<i64> {
        validate_name(name)?;
        let _guard = self.locks.lock(name).await;

        let mut player = self.load(name).await?;
        let paid_out = player.balance();
        player.cashout();
        self.ledger.remove(player.name()).await?;

        log::info!("{name} cashed out {paid_out} credits");
        Ok(paid_out)
    }

    /// Leave the casino
    ///
    /// A player with credit keeps their record and may return later; a
    /// player with an empty balance is deleted.
    ///
    /// # Errors
    ///
    /// * `CasinoError::PlayerNotFound` - No record for `name`
    pub async fn leave(&self, name: &str) -> CasinoResult<LeaveOutcome> {
        validate_name(name)?;
        let _guard = self.locks.lock(name).await;

        let player = self.load(name).await?;
        if player.balance() > 0 {
            log::info!("{name} left with {} credits kept", player.balance());
            return Ok(LeaveOutcome::Kept {
                balance: player.balance(),
            });
        }

        self.ledger.remove(name).await?;
        log::info!("{name} left the casino");
        Ok(LeaveOutcome::Removed)
    }

    /// Check that the ledger is reachable
    pub async fn health_check(&self) -> CasinoResult<()> {
        self.ledger.health_check().await?;
        Ok(())
    }

    async fn load(&self, name: &str) -> CasinoResult<Player> {
        self.ledger
            .get(name)
            .await?
            .ok_or_else(|| CasinoError::PlayerNotFound(name.to_string()))
    }
}

fn validate_name(name: &str) -> CasinoResult<()> {
    if name.is_empty() {
        return Err(CasinoError::InvalidInput(
            "Player name required.".to_string(),
        ));
    }
    Ok(())
}
