//! Request handlers for the climate API endpoints

use crate::app::http::response::{ApiError, TemperatureStatsResponse};
use crate::app::models::StationSummary;
use crate::app::services::climate_query::ClimateQuery;
use crate::constants::ROUTE_LIST;
use axum::extract::{Path, State};
use axum::Json;
use std::collections::BTreeMap;

/// Plain-text listing of the available routes
///
/// GET /
pub async fn index() -> String {
    route_listing()
}

/// Precipitation by date over the dataset's final year
///
/// GET /api/v1.0/precipitation
pub async fn precipitation(
    State(service): State<ClimateQuery>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    Ok(Json(service.recent_precipitation().await?))
}

/// The full station roster
///
/// GET /api/v1.0/stations
pub async fn stations(
    State(service): State<ClimateQuery>,
) -> Result<Json<Vec<StationSummary>>, ApiError> {
    Ok(Json(service.list_stations().await?))
}

/// Temperature observations for the most active station's final year
///
/// GET /api/v1.0/tobs
pub async fn tobs(
    State(service): State<ClimateQuery>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    Ok(Json(service.recent_observations().await?))
}

/// Temperature statistics from a start date to the end of the dataset
///
/// GET /api/v1.0/{start}
pub async fn temperature_range_open(
    State(service): State<ClimateQuery>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    let stats = service.temperature_summary(&start, None).await?;
    Ok(Json(TemperatureStatsResponse {
        start_date: start,
        end_date: None,
        temperature_stats: stats,
    }))
}

/// Temperature statistics between a start and end date, both inclusive
///
/// GET /api/v1.0/{start}/{end}
pub async fn temperature_range_closed(
    State(service): State<ClimateQuery>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    let stats = service.temperature_summary(&start, Some(&end)).await?;
    Ok(Json(TemperatureStatsResponse {
        start_date: start,
        end_date: Some(end),
        temperature_stats: stats,
    }))
}

/// Build the route listing shown by the index endpoint and the CLI
pub fn route_listing() -> String {
    let mut listing = String::from("Climate Observation API\nAvailable routes:\n");
    for route in ROUTE_LIST {
        listing.push_str(route);
        listing.push('\n');
    }
    listing
}
