//! Player API handlers.
//!
//! Thin adapters from query parameters to [`CasinoManager`] calls:
//! - Entering the casino (registers unknown names)
//! - Playing the slot machine
//! - Reading a balance
//! - Cashing out and leaving
//!
//! The server ledger is the only source of truth; every response carries
//! the balance as stored after the request.
//!
//! # Examples
//!
//! ```bash
//! curl -X POST 'http://localhost:5000/players/enter?name=alice'
//! curl -X POST 'http://localhost:5000/players/play?name=alice&bet=2'
//! curl 'http://localhost:5000/players/balance?name=alice'
//! ```
//!
//! [`CasinoManager`]: slot_casino::CasinoManager

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use slot_casino::{CasinoError, casino::LeaveOutcome, slots::Reels};
use std::time::Instant;

use super::AppState;
use crate::{logging, metrics};

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayQuery {
    #[serde(default)]
    pub name: String,
    pub bet: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayResponse {
    pub slots: Reels,
    pub balance: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Unwrap query parameters, reporting malformed ones in the JSON error shape.
fn parse_query<T>(
    action: &str,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| reject(action, "", CasinoError::InvalidInput(rejection.body_text())))
}

/// Map a casino error to an HTTP status and client-safe body.
fn reject(action: &str, name: &str, err: CasinoError) -> ApiError {
    let status = match &err {
        CasinoError::InvalidInput(_) | CasinoError::InsufficientBalance { .. } => {
            StatusCode::BAD_REQUEST
        }
        CasinoError::PlayerNotFound(_) => StatusCode::NOT_FOUND,
        CasinoError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    logging::log_declined(action, name, &err.to_string(), err.is_retryable());

    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
}

/// Enter the casino.
///
/// Unknown names are registered with the configured starting balance; known
/// names keep whatever they hold.
///
/// # Response
///
/// `200 OK`:
/// ```json
/// {"message": "alice entered the casino with $10 balance.", "balance": 10}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty name
/// - `503 Service Unavailable`: Ledger unavailable
pub async fn enter(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let query = parse_query("enter", query)?;
    let name = query.name;
    let outcome = state
        .casino
        .enter(&name)
        .await
        .map_err(|e| reject("enter", &name, e))?;

    metrics::player_entered(outcome.newly_registered);

    let message = if outcome.newly_registered {
        format!(
            "{name} entered the casino with ${} balance.",
            outcome.balance
        )
    } else {
        format!("{name} is already in the casino.")
    };
    logging::log_player_event("enter", &name, Some(outcome.balance), &message);

    Ok(Json(MessageResponse {
        message,
        balance: Some(outcome.balance),
    }))
}

/// Play the slot machine.
///
/// `bet` defaults to the configured default stake.
///
/// # Response
///
/// `200 OK`:
/// ```json
/// {"slots": [2, 2, 2], "balance": 40}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Empty name, malformed or non-positive bet, or
///   insufficient balance
/// - `404 Not Found`: Player has not entered
/// - `503 Service Unavailable`: Ledger unavailable; the play did not happen
pub async fn play(
    State(state): State<AppState>,
    query: Result<Query<PlayQuery>, QueryRejection>,
) -> ApiResult<PlayResponse> {
    let query = parse_query("play", query)?;
    let name = query.name;
    let bet = query.bet.unwrap_or(state.default_bet);
    let started = Instant::now();

    let outcome = match state.casino.play(&name, bet).await {
        Ok(outcome) => outcome,
        Err(e) => {
            metrics::play_declined(match &e {
                CasinoError::InsufficientBalance { .. } => "insufficient_balance",
                CasinoError::PlayerNotFound(_) => "player_not_found",
                CasinoError::InvalidInput(_) => "invalid_input",
                CasinoError::StorageUnavailable(_) => "storage_unavailable",
            });
            return Err(reject("play", &name, e));
        }
    };

    metrics::play_recorded(outcome.bet, outcome.payout, outcome.rerolled);
    logging::log_performance(
        "play",
        started.elapsed().as_millis() as u64,
        Some(&format!("bet={bet}")),
    );
    tracing::info!(
        player = %name,
        bet = bet,
        slots = ?outcome.slots,
        payout = outcome.payout,
        rerolled = outcome.rerolled,
        balance = outcome.balance,
        "Play resolved"
    );

    Ok(Json(PlayResponse {
        slots: outcome.slots,
        balance: outcome.balance,
    }))
}

/// Current balance.
///
/// # Response
///
/// `200 OK` with the balance as a bare integer.
///
/// # Errors
///
/// - `404 Not Found`: Player has not entered
pub async fn balance(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<i64> {
    let query = parse_query("balance", query)?;
    let name = query.name;
    state
        .casino
        .balance(&name)
        .await
        .map(Json)
        .map_err(|e| reject("balance", &name, e))
}

/// Cash out the whole balance and delete the player.
///
/// # Response
///
/// `200 OK` with the amount paid out as a bare integer.
///
/// # Errors
///
/// - `404 Not Found`: Player has not entered
/// - `503 Service Unavailable`: Ledger unavailable; nothing was paid
pub async fn cashout(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<i64> {
    let query = parse_query("cashout", query)?;
    let name = query.name;
    let paid_out = state
        .casino
        .cashout(&name)
        .await
        .map_err(|e| reject("cashout", &name, e))?;

    metrics::player_cashed_out(paid_out);
    logging::log_player_event(
        "cashout",
        &name,
        None,
        &format!("{name} cashed out ${paid_out}"),
    );

    Ok(Json(paid_out))
}

/// Leave the casino.
///
/// A player with credit keeps their record for a later return.
///
/// # Response
///
/// `200 OK`:
/// ```json
/// {"message": "alice has left the casino and may return to play with the remaining $5 credit.", "balance": 5}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Player has not entered
pub async fn leave(
    State(state): State<AppState>,
    query: Result<Query<PlayerQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let query = parse_query("leave", query)?;
    let name = query.name;
    let outcome = state
        .casino
        .leave(&name)
        .await
        .map_err(|e| reject("leave", &name, e))?;

    let response = match outcome {
        LeaveOutcome::Kept { balance } => MessageResponse {
            message: format!(
                "{name} has left the casino and may return to play with the remaining ${balance} credit."
            ),
            balance: Some(balance),
        },
        LeaveOutcome::Removed => MessageResponse {
            message: format!("{name} has left the casino."),
            balance: None,
        },
    };

    metrics::player_left(matches!(outcome, LeaveOutcome::Kept { .. }));
    logging::log_player_event("leave", &name, response.balance, &response.message);

    Ok(Json(response))
}
