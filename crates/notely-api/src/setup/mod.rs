//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use notely_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded successfully"
    );

    // Setup storage - fails fast on missing backend configuration
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
