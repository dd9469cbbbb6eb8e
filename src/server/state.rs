//! Shared application state for the dashboard API server

use crate::controller::DashboardController;
use crate::dataset::Dataset;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The dashboard dataset, loaded once at startup and read-only afterwards
    pub dataset: Arc<Dataset>,
    /// Interaction controller owning the current filter state
    /// Wrapped in a Mutex so filter events are handled one at a time
    pub controller: Arc<Mutex<DashboardController>>,
}

impl AppState {
    /// Creates application state around an already-loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        let controller = DashboardController::new(Arc::clone(&dataset));
        AppState {
            dataset,
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}
