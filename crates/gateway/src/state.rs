//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::UserService;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserService>, config: ApiConfig) -> Self {
        Self { users, config }
    }

    /// State backed by a fresh store built from `config`.
    pub fn from_config(config: ApiConfig) -> Self {
        let users = user_service_lib::build(&config.store);
        Self::new(users, config)
    }
}
