//! JSON API server exposing the dashboard to rendering clients

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::dataset::Dataset;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: "127.0.0.1")
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
    /// Path to the launch-records CSV file
    pub dataset_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            dataset_path: "data/launches.csv".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new server configuration
    pub fn new(host: impl Into<String>, port: u16, dataset_path: impl Into<String>) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            dataset_path: dataset_path.into(),
        }
    }
}

/// Runs the dashboard API server
///
/// Loads the dataset before binding: a load failure is fatal and surfaced
/// here, so no route ever observes a partial dataset.
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Returns an error if the dataset fails to load or the server fails to
/// start.
///
/// # Example
/// ```rust,no_run
/// use launch_dashboard::server::{run_server, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServerConfig::default();
///     run_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    // Load the dataset once, before any route is served
    let dataset = Dataset::from_csv_path(&config.dataset_path)?;
    tracing::info!(
        records = dataset.len(),
        path = %config.dataset_path,
        "Loaded launch dataset"
    );

    // Create application state
    let state = Arc::new(AppState::new(dataset));

    // Create router
    let app = routes::create_router(state);

    // Build server address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
