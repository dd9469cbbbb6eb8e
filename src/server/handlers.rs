//! HTTP request handlers for the dashboard API
//!
//! This layer plays the UI-widget and renderer roles: it supplies the fixed
//! site catalog and slider configuration, raises the two filter trigger
//! events against the interaction controller, and hands the resulting chart
//! specifications back to the client as JSON.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::controller::DashboardUpdate;
use crate::filter::{FilterState, PayloadRange, ALL_SITES};

/// Fixed catalog of selectable launch sites shown in the dropdown.
const SITE_CATALOG: [&str; 4] = [
    "CCAFS LC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
    "CCAFS SLC-40",
];

/// Payload slider bounds and step, in kilograms.
const SLIDER_MIN_KG: f64 = 0.0;
const SLIDER_MAX_KG: f64 = 10_000.0;
const SLIDER_STEP_KG: f64 = 1_000.0;

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// One selectable entry in the site dropdown
#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Payload slider configuration
#[derive(Debug, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection: the dataset-wide payload bounds
    pub value: [f64; 2],
}

/// Response for the widget catalog
#[derive(Debug, Serialize)]
pub struct SiteCatalogResponse {
    pub sites: Vec<SiteOption>,
    pub payload_slider: SliderConfig,
}

/// GET /sites - Site dropdown options and payload slider configuration
pub async fn get_site_catalog(State(state): State<Arc<AppState>>) -> Json<SiteCatalogResponse> {
    let mut sites = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    sites.extend(SITE_CATALOG.iter().map(|site| SiteOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    let (min, max) = state.dataset.payload_bounds();

    Json(SiteCatalogResponse {
        sites,
        payload_slider: SliderConfig {
            min: SLIDER_MIN_KG,
            max: SLIDER_MAX_KG,
            step: SLIDER_STEP_KG,
            value: [min, max],
        },
    })
}

/// Current filter selections in wire form
#[derive(Debug, Serialize)]
pub struct FilterView {
    pub site: String,
    pub payload_range: PayloadRange,
}

impl FilterView {
    fn from_state(state: &FilterState) -> Self {
        FilterView {
            site: state.site.as_selection().to_string(),
            payload_range: state.payload_range,
        }
    }
}

/// Response carrying the filter state and both chart specs
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub filter: FilterView,
    #[serde(flatten)]
    pub update: DashboardUpdate,
}

/// GET /dashboard - Current filter state and both chart specifications
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let controller = state.controller.lock().await;
    Json(DashboardResponse {
        filter: FilterView::from_state(controller.filter_state()),
        update: controller.recompute(),
    })
}

/// Request body for the site trigger event
#[derive(Debug, Deserialize)]
pub struct SiteEvent {
    pub site: String,
}

/// POST /events/site - Site dropdown changed
///
/// An unknown site is accepted and yields empty charts; the dropdown is the
/// source of truth for valid values, not this endpoint.
pub async fn site_changed(
    State(state): State<Arc<AppState>>,
    Json(event): Json<SiteEvent>,
) -> Json<DashboardResponse> {
    let mut controller = state.controller.lock().await;
    let update = controller.on_site_changed(&event.site);
    Json(DashboardResponse {
        filter: FilterView::from_state(controller.filter_state()),
        update,
    })
}

/// POST /events/payload-range - Payload slider changed
///
/// The body is parsed leniently: a missing or non-numeric bound becomes an
/// empty range, so a malformed slider value produces empty charts rather
/// than a failed render. A body that is not a JSON object is rejected.
pub async fn payload_range_changed(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<DashboardResponse>, ApiError> {
    if !body.is_object() {
        return Err(ApiError::InvalidParameter(
            "Expected a JSON object with min and max".to_string(),
        ));
    }

    let min = body.get("min").and_then(Value::as_f64).unwrap_or(f64::NAN);
    let max = body.get("max").and_then(Value::as_f64).unwrap_or(f64::NAN);
    let range = PayloadRange::new(min, max);

    let mut controller = state.controller.lock().await;
    let update = controller.on_payload_range_changed(range);
    Ok(Json(DashboardResponse {
        filter: FilterView::from_state(controller.filter_state()),
        update,
    }))
}
