//! HTTP server for the slot casino ledger.
//!
//! Exposes [`slot_casino::CasinoManager`] over a small query-parameter API and
//! carries the server's ambient stack: environment configuration, structured
//! logging and Prometheus metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
