//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use slot_casino::{HouseEdge, Player, ledger::LedgerConfig};
use std::{net::SocketAddr, path::PathBuf};

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Ledger configuration
    pub ledger: LedgerConfig,
    /// Keep player records in memory instead of the ledger file
    pub in_memory: bool,
    /// Casino rules
    pub casino: CasinoConfig,
    /// Optional Prometheus scrape listener
    pub metrics_bind: Option<SocketAddr>,
}

/// Casino rule configuration
#[derive(Debug, Clone)]
pub struct CasinoConfig {
    /// Credits granted to a newly entered player
    pub initial_balance: i64,
    /// Stake used when a play request names none
    pub default_bet: i64,
    /// Re-roll policy
    pub house_edge: HouseEdge,
    /// Fixed RNG seed; entropy when unset
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `ledger_path_override` - Optional ledger file override (from CLI args)
    /// * `in_memory` - Use a volatile ledger (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a set variable cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        ledger_path_override: Option<PathBuf>,
        in_memory: bool,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env_opt("SERVER_BIND")?
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000))),
        };

        let mut ledger = LedgerConfig::from_env();
        if let Some(path) = ledger_path_override {
            ledger.path = path;
        }

        let defaults = HouseEdge::default();
        let house_edge = HouseEdge {
            mid_band_floor: parse_env_opt("HOUSE_EDGE_MID_FLOOR")?
                .unwrap_or(defaults.mid_band_floor),
            mid_band_ceiling: parse_env_opt("HOUSE_EDGE_MID_CEILING")?
                .unwrap_or(defaults.mid_band_ceiling),
            mid_band_reroll: parse_env_opt("HOUSE_EDGE_MID_REROLL")?
                .unwrap_or(defaults.mid_band_reroll),
            high_band_reroll: parse_env_opt("HOUSE_EDGE_HIGH_REROLL")?
                .unwrap_or(defaults.high_band_reroll),
        };

        let casino = CasinoConfig {
            initial_balance: parse_env_opt("INITIAL_BALANCE")?
                .unwrap_or(Player::INITIAL_BALANCE),
            default_bet: parse_env_opt("DEFAULT_BET")?
                .unwrap_or(slot_casino::DEFAULT_BET),
            house_edge,
            rng_seed: parse_env_opt("SLOT_RNG_SEED")?,
        };

        Ok(ServerConfig {
            bind,
            ledger,
            in_memory,
            casino,
            metrics_bind: parse_env_opt("METRICS_BIND")?,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.casino.initial_balance < 0 {
            return Err(ConfigError::Invalid {
                var: "INITIAL_BALANCE".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        if self.casino.default_bet <= 0 {
            return Err(ConfigError::Invalid {
                var: "DEFAULT_BET".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let edge = &self.casino.house_edge;
        if edge.mid_band_ceiling < edge.mid_band_floor {
            return Err(ConfigError::Invalid {
                var: "HOUSE_EDGE_MID_CEILING".to_string(),
                reason: format!("Must be at least the floor ({})", edge.mid_band_floor),
            });
        }

        for (var, chance) in [
            ("HOUSE_EDGE_MID_REROLL", edge.mid_band_reroll),
            ("HOUSE_EDGE_HIGH_REROLL", edge.high_band_reroll),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: "Must be a probability between 0 and 1".to_string(),
                });
            }
        }

        if self.ledger.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "LEDGER_MAX_CONNECTIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Optional variable that must parse when present
fn parse_env_opt<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: key.to_string(),
        reason: format!("{raw:?}: {e}"),
    })
}
