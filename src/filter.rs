//! Filter Engine
//!
//! Pure selection and aggregation over the launch dataset. Both chart views
//! are driven entirely by the two functions here: `summarize_outcomes` feeds
//! the aggregate outcome chart and `select_scatter_points` feeds the
//! payload-vs-outcome scatter chart. Both are deterministic, side-effect
//! free, and never mutate the dataset they read.

use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// Sentinel wire value meaning "no site filter" — matches the UI dropdown.
pub const ALL_SITES: &str = "ALL";

/// Site filter selection.
///
/// The UI layer supplies plain strings with an "ALL" sentinel; parsing them
/// into this enum up front means the engine and the filter state can never
/// disagree about what the sentinel looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    /// No site filter — include every site
    All,
    /// Restrict to a single launch site
    Site(String),
}

impl SiteFilter {
    /// Parses a UI selection string, treating the "ALL" sentinel specially.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(selection.to_string())
        }
    }

    /// The wire value for this selection ("ALL" or the site identifier).
    pub fn as_selection(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES,
            SiteFilter::Site(site) => site,
        }
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(selected) => selected == site,
        }
    }
}

/// Inclusive payload mass bounds in kilograms.
///
/// A range with `min > max` or a non-finite bound is empty: it contains
/// nothing and yields empty results rather than an error, so a malformed
/// slider value can never break the rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    /// Creates a new inclusive payload range.
    pub fn new(min: f64, max: f64) -> Self {
        PayloadRange { min, max }
    }

    /// Whether this range contains no values.
    pub fn is_empty(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite() || self.min > self.max
    }

    /// Whether `mass` falls within the range, inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        !self.is_empty() && mass >= self.min && mass <= self.max
    }
}

/// Current filter selections for both chart views.
///
/// Owned and mutated only by the interaction controller; the filter engine
/// reads it and never writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Current site selection
    pub site: SiteFilter,
    /// Current payload range selection
    pub payload_range: PayloadRange,
}

impl FilterState {
    /// Initial filter state: all sites, full dataset payload range.
    pub fn initial(dataset: &Dataset) -> Self {
        let (min, max) = dataset.payload_bounds();
        FilterState {
            site: SiteFilter::All,
            payload_range: PayloadRange::new(min, max),
        }
    }
}

/// One category of an outcome summary: a label and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCategory {
    pub label: String,
    pub count: u64,
}

/// Insertion-ordered mapping from category label to count.
///
/// Categories are either site names (all-sites view) or outcome names
/// (single-site view). Order is first appearance in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutcomeSummary {
    categories: Vec<OutcomeCategory>,
}

impl OutcomeSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        OutcomeSummary::default()
    }

    /// Adds `amount` to the category with `label`, creating it at the end
    /// of the summary on first appearance.
    fn add(&mut self, label: &str, amount: u64) {
        match self.categories.iter_mut().find(|c| c.label == label) {
            Some(category) => category.count += amount,
            None => self.categories.push(OutcomeCategory {
                label: label.to_string(),
                count: amount,
            }),
        }
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> &[OutcomeCategory] {
        &self.categories
    }

    /// Count for a given label, if present.
    pub fn count(&self, label: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
    }

    /// Sum of all category counts.
    pub fn total(&self) -> u64 {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Whether the summary has zero categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// One point of the payload-vs-outcome scatter view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass in kilograms (scatter x value)
    pub payload_mass_kg: f64,
    /// Numeric outcome class, success = 1 / failure = 0 (scatter y value)
    pub outcome_class: u8,
    /// Booster version category (scatter color grouping)
    pub booster_category: String,
}

/// Aggregates launch outcomes for the outcome chart.
///
/// With `SiteFilter::All` the summary has one category per distinct site in
/// first-appearance order, counting that site's successful launches. With a
/// specific site the summary counts each outcome value at that site, labeled
/// "Success"/"Failure" in order of first appearance.
///
/// An unknown site, or a site with no records, yields an empty summary.
pub fn summarize_outcomes(dataset: &Dataset, site: &SiteFilter) -> OutcomeSummary {
    let mut summary = OutcomeSummary::new();
    match site {
        SiteFilter::All => {
            for record in dataset.records() {
                let successes = u64::from(record.outcome.is_success());
                summary.add(&record.site, successes);
            }
        }
        SiteFilter::Site(selected) => {
            for record in dataset.records() {
                if &record.site == selected {
                    summary.add(record.outcome.label(), 1);
                }
            }
        }
    }
    summary
}

/// Selects the scatter points matching the current filters.
///
/// Keeps records whose payload mass lies within `range` (inclusive on both
/// ends) and, for a specific site selection, whose site matches. Returns one
/// point per surviving record in original dataset order. An empty or
/// malformed range yields an empty sequence.
pub fn select_scatter_points(
    dataset: &Dataset,
    site: &SiteFilter,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg) && site.matches(&record.site))
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            booster_category: record.booster_category.clone(),
        })
        .collect()
}
