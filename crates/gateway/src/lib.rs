//! Users API Gateway Library
//!
//! This crate provides the HTTP REST API over the user service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the full application (routes plus request tracing) for `state`.
pub fn build_app(state: AppState) -> Router {
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;

    // Create user store and app state
    let state = AppState::from_config(config);

    // Build router
    let app = build_app(state);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
