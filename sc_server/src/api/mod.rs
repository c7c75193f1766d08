//! HTTP API for the slot casino server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework
//! - **Tower**: Middleware for CORS and request IDs
//! - **CasinoManager**: Per-request coordinator over the player ledger
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                      - Server and ledger health
//! POST /players/enter?name=         - Enter the casino
//! POST /players/play?name=&bet=     - Play the slot machine (bet defaults to 1)
//! GET  /players/balance?name=       - Current balance
//! POST /players/cashout?name=       - Cash out and delete the player
//! POST /players/leave?name=         - Leave, keeping any remaining credit
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use sc_server::api::{create_router, AppState};
//! use slot_casino::{CasinoManager, ledger::MemoryLedger};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     casino: Arc::new(CasinoManager::new(Arc::new(MemoryLedger::new()))),
//!     default_bet: 1,
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively so browser and mobile clients can call the
//! server directly during development.

pub mod players;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use slot_casino::CasinoManager;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; cheap due to the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub casino: Arc<CasinoManager>,
    /// Stake used when a play request omits `bet`
    pub default_bet: i64,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let player_routes = Router::new()
        .route("/enter", post(players::enter))
        .route("/play", post(players::play))
        .route("/balance", get(players::balance))
        .route("/cashout", post(players::cashout))
        .route("/leave", post(players::leave));

    Router::new()
        .route("/health", get(health_check))
        .nest("/players", player_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// Returns `200 OK` when the ledger answers, `503 Service Unavailable`
/// otherwise.
///
/// ```bash
/// curl http://localhost:5000/health
/// # {"status":"healthy","ledger":true,"version":"1.0.0","timestamp":"2026-10-16T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let ledger_healthy = match state.casino.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Ledger health check failed");
            false
        }
    };

    let status_code = if ledger_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if ledger_healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "ledger": ledger_healthy,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}
