//! View Adapters
//!
//! Thin mappers from filter-engine output to the chart specifications handed
//! to a rendering collaborator. Nothing here computes anything: adapters only
//! attach titles and axis bindings. Any business rule belongs in the filter
//! engine, not here.

use crate::filter::{OutcomeSummary, ScatterPoint, SiteFilter};
use serde::Serialize;

/// Specification for the aggregate outcome (pie) chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartSpec {
    pub title: String,
    /// Category labels, one per slice
    pub labels: Vec<String>,
    /// Category counts, parallel to `labels`
    pub values: Vec<u64>,
}

/// Column bindings telling the renderer which point field drives which axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisBindings {
    pub x: &'static str,
    pub y: &'static str,
    pub color: &'static str,
}

/// Specification for the payload-vs-outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub axes: AxisBindings,
    pub points: Vec<ScatterPoint>,
}

/// Wraps an outcome summary into a pie chart specification.
pub fn to_outcome_chart_spec(summary: OutcomeSummary, site: &SiteFilter) -> PieChartSpec {
    let title = match site {
        SiteFilter::All => "Successful Launches from All Sites".to_string(),
        SiteFilter::Site(site) => format!("Outcome {}", site),
    };
    let (labels, values) = summary
        .categories()
        .iter()
        .map(|c| (c.label.clone(), c.count))
        .unzip();
    PieChartSpec {
        title,
        labels,
        values,
    }
}

/// Wraps scatter points with axis bindings and a title.
pub fn to_scatter_chart_spec(points: Vec<ScatterPoint>, site: &SiteFilter) -> ScatterChartSpec {
    let title = match site {
        SiteFilter::All => "All Sites Success by Payload and Booster Version".to_string(),
        SiteFilter::Site(site) => format!("{} Success by Payload and Booster Version", site),
    };
    ScatterChartSpec {
        title,
        axes: AxisBindings {
            x: "payload_mass_kg",
            y: "outcome_class",
            color: "booster_category",
        },
        points,
    }
}
