pub mod record;
pub mod dataset;
pub mod filter;
pub mod chart;
pub mod controller;
pub mod server;

pub use record::{LaunchRecord, Outcome};
pub use dataset::{Dataset, DatasetError};
pub use filter::{
    select_scatter_points, summarize_outcomes, FilterState, OutcomeCategory, OutcomeSummary,
    PayloadRange, ScatterPoint, SiteFilter, ALL_SITES,
};
pub use chart::{
    to_outcome_chart_spec, to_scatter_chart_spec, AxisBindings, PieChartSpec, ScatterChartSpec,
};
pub use controller::{DashboardController, DashboardUpdate};
pub use server::{run_server, ApiError, AppState, ServerConfig};
