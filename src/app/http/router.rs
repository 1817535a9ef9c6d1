//! Route table for the climate API

use crate::app::http::handlers;
use crate::app::services::climate_query::ClimateQuery;
use crate::constants::API_BASE;
use axum::routing::get;
use axum::Router;

/// Build the application router over a query service
///
/// Static routes take precedence over the `{start}` capture, so the named
/// endpoints are matched before a path segment is treated as a date.
pub fn router(service: ClimateQuery) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            &format!("{API_BASE}/precipitation"),
            get(handlers::precipitation),
        )
        .route(&format!("{API_BASE}/stations"), get(handlers::stations))
        .route(&format!("{API_BASE}/tobs"), get(handlers::tobs))
        .route(
            &format!("{API_BASE}/{{start}}"),
            get(handlers::temperature_range_open),
        )
        .route(
            &format!("{API_BASE}/{{start}}/{{end}}"),
            get(handlers::temperature_range_closed),
        )
        .with_state(service)
}
