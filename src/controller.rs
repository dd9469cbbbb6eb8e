//! Interaction Controller
//!
//! The only stateful component: owns the current filter selections and
//! recomputes both chart specifications synchronously on every trigger
//! event. Interactions are serialized by whoever holds the controller (the
//! HTTP layer keeps it behind a mutex); the controller itself never queues
//! or defers work.

use crate::chart::{to_outcome_chart_spec, to_scatter_chart_spec, PieChartSpec, ScatterChartSpec};
use crate::dataset::Dataset;
use crate::filter::{
    select_scatter_points, summarize_outcomes, FilterState, PayloadRange, SiteFilter,
};
use serde::Serialize;
use std::sync::Arc;

/// Both chart specifications produced by one interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub outcome_chart: PieChartSpec,
    pub scatter_chart: ScatterChartSpec,
}

/// Owns the filter state and drives recomputation of both chart views.
#[derive(Debug, Clone)]
pub struct DashboardController {
    dataset: Arc<Dataset>,
    filter: FilterState,
}

impl DashboardController {
    /// Creates a controller with the initial filter state: all sites,
    /// payload range seeded from the dataset bounds.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filter = FilterState::initial(&dataset);
        DashboardController { dataset, filter }
    }

    /// Current filter selections.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Site dropdown changed. Updates the site selection and recomputes
    /// both charts.
    pub fn on_site_changed(&mut self, selection: &str) -> DashboardUpdate {
        self.filter.site = SiteFilter::from_selection(selection);
        tracing::debug!(site = selection, "site filter changed");
        self.recompute()
    }

    /// Payload slider changed. Updates the payload range and recomputes
    /// both charts. A malformed range flows through unchanged; the filter
    /// engine treats it as empty.
    pub fn on_payload_range_changed(&mut self, range: PayloadRange) -> DashboardUpdate {
        self.filter.payload_range = range;
        tracing::debug!(min = range.min, max = range.max, "payload range changed");
        self.recompute()
    }

    /// Recomputes both chart specs from the current filter state.
    pub fn recompute(&self) -> DashboardUpdate {
        let summary = summarize_outcomes(&self.dataset, &self.filter.site);
        let points = select_scatter_points(
            &self.dataset,
            &self.filter.site,
            &self.filter.payload_range,
        );
        DashboardUpdate {
            outcome_chart: to_outcome_chart_spec(summary, &self.filter.site),
            scatter_chart: to_scatter_chart_spec(points, &self.filter.site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LaunchRecord, Outcome};

    fn controller() -> DashboardController {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("A", 1500.0, "v1.1", Outcome::Failure),
            LaunchRecord::new("B", 800.0, "FT", Outcome::Success),
        ])
        .unwrap();
        DashboardController::new(Arc::new(dataset))
    }

    #[test]
    fn test_initial_state_covers_all_sites_and_full_range() {
        let controller = controller();
        assert_eq!(controller.filter_state().site, SiteFilter::All);
        assert_eq!(
            controller.filter_state().payload_range,
            PayloadRange::new(500.0, 1500.0)
        );

        let update = controller.recompute();
        assert_eq!(update.scatter_chart.points.len(), 3);
        assert_eq!(update.outcome_chart.labels, vec!["A", "B"]);
    }

    #[test]
    fn test_site_event_updates_both_charts() {
        let mut controller = controller();
        let update = controller.on_site_changed("A");

        assert_eq!(update.outcome_chart.title, "Outcome A");
        assert_eq!(
            update.scatter_chart.title,
            "A Success by Payload and Booster Version"
        );
        assert_eq!(update.scatter_chart.points.len(), 2);
    }

    #[test]
    fn test_payload_event_narrows_scatter_only() {
        let mut controller = controller();
        let update = controller.on_payload_range_changed(PayloadRange::new(0.0, 1000.0));

        // Outcome chart ignores the payload range
        assert_eq!(update.outcome_chart.values, vec![1, 1]);
        assert_eq!(update.scatter_chart.points.len(), 2);
    }

    #[test]
    fn test_events_compose() {
        let mut controller = controller();
        controller.on_site_changed("A");
        let update = controller.on_payload_range_changed(PayloadRange::new(0.0, 1000.0));

        assert_eq!(update.scatter_chart.points.len(), 1);
        assert_eq!(update.scatter_chart.points[0].payload_mass_kg, 500.0);
    }

    #[test]
    fn test_returning_to_all_restores_aggregate_view() {
        let mut controller = controller();
        controller.on_site_changed("B");
        let update = controller.on_site_changed("ALL");

        assert_eq!(
            update.outcome_chart.title,
            "Successful Launches from All Sites"
        );
        assert_eq!(update.outcome_chart.labels, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_site_yields_empty_charts() {
        let mut controller = controller();
        let update = controller.on_site_changed("NOWHERE");

        assert!(update.outcome_chart.labels.is_empty());
        assert!(update.scatter_chart.points.is_empty());
    }

    #[test]
    fn test_inverted_range_yields_empty_scatter() {
        let mut controller = controller();
        let update = controller.on_payload_range_changed(PayloadRange::new(5000.0, 100.0));

        assert!(update.scatter_chart.points.is_empty());
        // Outcome chart is unaffected by the range
        assert!(!update.outcome_chart.labels.is_empty());
    }
}
