//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including initialization of the metrics collector and route setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::routes;
use crate::state::AppState;

/// Initializes and runs the application server.
///
/// Builds the metrics collector and the router, binds to the address
/// specified in the configuration and serves requests until the process
/// is terminated.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Metrics::new(&config.metrics.service_name);

    let state = AppState {
        config: config.clone(),
        metrics,
    };

    let app = routes::create_router(state);

    info!("Starting server on {}", config.bind_address);

    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
