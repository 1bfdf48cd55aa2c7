//! User Service Library
//!
//! This crate owns the user collection: the in-memory [`UserStore`] behind
//! the [`UserRepository`] trait, and the [`UserService`] use cases the HTTP
//! gateway calls into.

pub mod repository;
pub mod service;

use std::sync::Arc;

use common::StoreConfig;
use tracing::info;

pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};

/// Build the user service described by `config`.
pub fn build(config: &StoreConfig) -> Arc<dyn UserService> {
    let store = if config.seed {
        UserStore::seeded(config.id_strategy)
    } else {
        UserStore::empty(config.id_strategy)
    };
    info!(
        seeded = config.seed,
        id_strategy = %config.id_strategy,
        "User store initialized"
    );

    Arc::new(UserManager::new(Arc::new(store)))
}
