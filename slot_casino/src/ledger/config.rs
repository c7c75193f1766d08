//! Ledger configuration module.
//!
//! Provides configuration for the embedded player ledger file.

use std::{env, path::PathBuf};

/// Ledger configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Path of the SQLite ledger file
    pub path: PathBuf,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connection_timeout_secs: u64,

    /// How long a writer waits on a locked database before failing, in seconds
    pub busy_timeout_secs: u64,
}

impl LedgerConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `LEDGER_PATH`: Ledger file path (default: `players.db`)
    /// - `LEDGER_MAX_CONNECTIONS`: Maximum pool size (default: 8)
    /// - `LEDGER_CONNECTION_TIMEOUT_SECS`: Acquire timeout in seconds (default: 5)
    /// - `LEDGER_BUSY_TIMEOUT_SECS`: SQLite busy timeout in seconds (default: 5)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::development();
        Self {
            path: env::var("LEDGER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.path),
            max_connections: parse_env_or("LEDGER_MAX_CONNECTIONS", defaults.max_connections),
            connection_timeout_secs: parse_env_or(
                "LEDGER_CONNECTION_TIMEOUT_SECS",
                defaults.connection_timeout_secs,
            ),
            busy_timeout_secs: parse_env_or("LEDGER_BUSY_TIMEOUT_SECS", defaults.busy_timeout_secs),
        }
    }

    /// Create a default configuration for development
    ///
    /// Uses `players.db` in the working directory.
    pub fn development() -> Self {
        Self {
            path: PathBuf::from("players.db"),
            max_connections: 8,
            connection_timeout_secs: 5,
            busy_timeout_secs: 5,
        }
    }

    /// Configuration for a ledger file at `path` with development pool settings
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::development()
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::development()
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.path, PathBuf::from("players.db"));
        assert_eq!(config.max_connections, 8);
    }

    #[test]
    fn test_at_overrides_path_only() {
        let config = LedgerConfig::at("/tmp/ledger.db");
        assert_eq!(config.path, PathBuf::from("/tmp/ledger.db"));
        assert_eq!(config.busy_timeout_secs, 5);
    }
}
