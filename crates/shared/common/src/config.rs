//! Shared configuration structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "users-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3500,
            log_level: "info,tower_http=debug".to_string(),
        }
    }
}

/// How the store picks the id of a newly created user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `id = number of users + 1`. May repeat an id after a deletion.
    #[default]
    Length,
    /// Counter that only moves forward and never repeats an id.
    Sequential,
}

/// Unknown id strategy name.
#[derive(Debug, Error)]
#[error("unknown id strategy '{0}' (expected 'length' or 'sequential')")]
pub struct ParseIdStrategyError(String);

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(ParseIdStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Length => write!(f, "length"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Id assignment policy for created users
    pub id_strategy: IdStrategy,
    /// Load the seed users at startup
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Length,
            seed: true,
        }
    }
}

/// Parse a boolean flag the way env files usually spell it.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_strategy_from_str() {
        assert_eq!("length".parse::<IdStrategy>().unwrap(), IdStrategy::Length);
        assert_eq!(
            " Sequential ".parse::<IdStrategy>().unwrap(),
            IdStrategy::Sequential
        );
        assert!("max".parse::<IdStrategy>().is_err());
    }

    #[test]
    fn test_id_strategy_display_round_trips() {
        for strategy in [IdStrategy::Length, IdStrategy::Sequential] {
            assert_eq!(strategy.to_string().parse::<IdStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults() {
        let store = StoreConfig::default();
        assert_eq!(store.id_strategy, IdStrategy::Length);
        assert!(store.seed);
        assert_eq!(ServiceConfig::default().port, 3500);
    }
}
