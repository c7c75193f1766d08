//! Prometheus metrics for the casino server.
//!
//! Metrics are exposed in Prometheus text format on a separate listener when
//! `METRICS_BIND` is set. Recording is a no-op until an exporter is installed.
//!
//! # Metrics Categories
//!
//! - **HTTP Metrics**: Request counts, duration, status codes
//! - **Game Metrics**: Plays, wins, house-edge re-rolls, credits paid
//! - **Player Metrics**: Entries, cash-outs, departures

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Game Metrics
// ============================================================================

/// Record one resolved play.
pub fn play_recorded(bet: i64, payout: i64, rerolled: bool) {
    metrics::counter!("plays_total").increment(1);
    metrics::counter!("credits_wagered_total").increment(bet.unsigned_abs());
    if payout > 0 {
        metrics::counter!("wins_total").increment(1);
        metrics::counter!("credits_paid_total").increment(payout.unsigned_abs());
    }
    if rerolled {
        metrics::counter!("house_edge_rerolls_total").increment(1);
    }
}

/// Increment declined plays counter.
pub fn play_declined(reason: &'static str) {
    metrics::counter!("plays_declined_total", "reason" => reason).increment(1);
}

// ============================================================================
// Player Metrics
// ============================================================================

/// Increment entries counter.
pub fn player_entered(newly_registered: bool) {
    metrics::counter!("player_entries_total",
        "new" => newly_registered.to_string()
    )
    .increment(1);
}

/// Record a cash-out and its amount.
pub fn player_cashed_out(amount: i64) {
    metrics::counter!("cashouts_total").increment(1);
    metrics::histogram!("cashout_credits").record(amount as f64);
}

/// Increment departures counter.
pub fn player_left(record_kept: bool) {
    metrics::counter!("player_departures_total",
        "record_kept" => record_kept.to_string()
    )
    .increment(1);
}
