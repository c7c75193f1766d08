//! Slot Session Example
//!
//! Plays a short session against an in-memory ledger and shows how the
//! house edge reacts as the balance grows.

use slot_casino::casino::{CasinoError, CasinoManager, LeaveOutcome};
use slot_casino::ledger::MemoryLedger;
use slot_casino::slots::{HouseEdge, SlotMachine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), CasinoError> {
    println!("=== Slot Session Example ===\n");

    let casino = CasinoManager::new(Arc::new(MemoryLedger::new()))
        .with_machine(SlotMachine::seeded(2024, HouseEdge::default()))
        .with_initial_balance(50);

    let entered = casino.enter("alice").await?;
    println!("alice entered with {} credits\n", entered.balance);

    for round in 1..=15 {
        match casino.play("alice", 2).await {
            Ok(outcome) => println!(
                "Round {round:>2}: {:?} payout {:>2}{} -> balance {}",
                outcome.slots,
                outcome.payout,
                if outcome.rerolled { " (re-rolled)" } else { "" },
                outcome.balance
            ),
            Err(CasinoError::InsufficientBalance { available, .. }) => {
                println!("Round {round:>2}: out of credit ({available})");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    match casino.leave("alice").await? {
        LeaveOutcome::Kept { balance } => {
            println!("\nalice left; {balance} credits kept for later");
            let paid = casino.cashout("alice").await?;
            println!("alice came back and cashed out {paid} credits");
        }
        LeaveOutcome::Removed => println!("\nalice left with nothing"),
    }

    Ok(())
}
