//! Slot casino server.
//!
//! Serves the player ledger over HTTP, backed by an embedded SQLite file or
//! an in-memory store.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use pico_args::Arguments;
use sc_server::{api, config::ServerConfig, logging, metrics};
use slot_casino::{
    CasinoManager, SlotMachine,
    ledger::{Ledger, LedgerStore, MemoryLedger, SqliteLedger},
};
use tracing::info;

const HELP: &str = "\
Run the slot casino ledger server

USAGE:
  sc_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:5000]
  --ledger     PATH        Ledger file                 [default: env LEDGER_PATH or players.db]

FLAGS:
  --in-memory              Keep players in memory only (nothing survives a restart)
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  LEDGER_PATH              SQLite ledger file
  INITIAL_BALANCE          Credits granted to new players  [default: 10]
  DEFAULT_BET              Stake when a play names none    [default: 1]
  METRICS_BIND             Prometheus listener (disabled when unset)
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let in_memory = pargs.contains("--in-memory");
    let bind: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let ledger_path: Option<PathBuf> = pargs.opt_value_from_str("--ledger")?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unrecognized arguments: {:?}", remaining);
    }

    let config = ServerConfig::from_env(bind, ledger_path, in_memory)?;
    config.validate()?;

    logging::init();
    info!("Starting slot casino server at {}", config.bind);

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics listening on {}", metrics_bind);
    }

    let store: Arc<dyn LedgerStore> = if config.in_memory {
        info!("Using in-memory ledger; balances will not survive a restart");
        Arc::new(MemoryLedger::new())
    } else {
        info!("Opening ledger: {}", config.ledger.path.display());
        let ledger = Ledger::open(&config.ledger)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open ledger: {}", e))?;
        info!("Ledger opened successfully");
        Arc::new(SqliteLedger::from(ledger))
    };

    let casino_config = &config.casino;
    let machine = match casino_config.rng_seed {
        Some(seed) => {
            info!("Slot machine seeded with {}", seed);
            SlotMachine::seeded(seed, casino_config.house_edge)
        }
        None => SlotMachine::with_house_edge(casino_config.house_edge),
    };

    let casino = CasinoManager::new(store)
        .with_machine(machine)
        .with_initial_balance(casino_config.initial_balance);

    let edge = casino.machine().house_edge();
    info!(
        "New players start with {} credits; house edge: {}% re-roll in [{}, {}], {}% above",
        casino.initial_balance(),
        edge.mid_band_reroll * 100.0,
        edge.mid_band_floor,
        edge.mid_band_ceiling,
        edge.high_band_reroll * 100.0
    );

    let api_state = api::AppState {
        casino: Arc::new(casino),
        default_bet: casino_config.default_bet,
    };

    let app = api::create_router(api_state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
