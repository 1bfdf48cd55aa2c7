//! Gateway configuration.

use std::env;

use common::{parse_flag, IdStrategy, ServiceConfig, StoreConfig};

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// In-memory store settings
    pub store: StoreConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Unset or unparseable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: lookup("USERS_API_HOST").unwrap_or(defaults.service.host),
                port: lookup("USERS_API_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: lookup("RUST_LOG").unwrap_or(defaults.service.log_level),
            },
            store: StoreConfig {
                id_strategy: lookup("USERS_ID_STRATEGY")
                    .and_then(|s| s.parse::<IdStrategy>().ok())
                    .unwrap_or(defaults.store.id_strategy),
                seed: lookup("USERS_SEED")
                    .and_then(|s| parse_flag(&s))
                    .unwrap_or(defaults.store.seed),
            },
        }
    }
}
