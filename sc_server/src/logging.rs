//! Structured logging configuration.
//!
//! The library logs through the `log` facade; the subscriber installed here
//! captures those records alongside the server's own `tracing` events.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var and default to
/// `info,sqlx=warn,hyper=warn`.
///
/// # Example
///
/// ```no_run
/// use sc_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a player-facing ledger event with structured data
///
/// # Arguments
///
/// * `event_type` - Action name (`enter`, `play`, `cashout`, `leave`)
/// * `player` - Player name
/// * `balance` - Balance after the action, when one exists
/// * `message` - Event message
pub fn log_player_event(event_type: &str, player: &str, balance: Option<i64>, message: &str) {
    tracing::info!(
        event_type = event_type,
        player = player,
        balance = balance,
        "PLAYER: {}",
        message
    );
}

/// Log a declined or failed request
///
/// Storage failures are logged at `error` since they need operator
/// attention; expected declines stay at `debug`.
pub fn log_declined(event_type: &str, player: &str, reason: &str, retryable: bool) {
    if retryable {
        tracing::error!(
            event_type = event_type,
            player = player,
            reason = reason,
            "Request failed on storage"
        );
    } else {
        tracing::debug!(
            event_type = event_type,
            player = player,
            reason = reason,
            "Request declined"
        );
    }
}

/// Log performance metric
///
/// # Arguments
///
/// * `operation` - Operation name
/// * `duration_ms` - Duration in milliseconds
/// * `metadata` - Additional metadata
///
/// # Example
///
/// ```
/// use sc_server::logging::log_performance;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... do work ...
/// let duration = start.elapsed().as_millis() as u64;
/// log_performance("ledger_upsert", duration, Some("players"));
/// ```
pub fn log_performance(operation: &str, duration_ms: u64, metadata: Option<&str>) {
    if duration_ms > 1000 {
        tracing::warn!(
            operation = operation,
            duration_ms = duration_ms,
            metadata = metadata,
            "PERFORMANCE: Slow operation"
        );
    } else {
        tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            metadata = metadata,
            "Performance metric"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_player_event() {
        // Just ensure it doesn't panic
        log_player_event("enter", "alice", Some(10), "alice entered");
        log_player_event("cashout", "alice", None, "alice cashed out");
    }

    #[test]
    fn test_log_declined() {
        log_declined("play", "bob", "Insufficient balance", false);
        log_declined("play", "bob", "Storage unavailable", true);
    }

    #[test]
    fn test_log_performance() {
        log_performance("play", 5, Some("bet=1"));
        log_performance("slow_play", 2000, None);
    }
}
