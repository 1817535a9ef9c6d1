//! Response payloads and error mapping for the HTTP surface

use crate::app::models::TemperatureSummary;
use crate::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Temperature statistics over a requested date range
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureStatsResponse {
    /// Start date echoed from the request path
    pub start_date: String,

    /// End date echoed from the request path, absent for open-ended ranges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Aggregate temperature statistics for the range
    pub temperature_stats: TemperatureSummary,
}

/// Error body carried by non-success responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Service error adapted to an HTTP response
///
/// A no-observations result is the only error the API surfaces as a client
/// visible condition (404). Everything else is an internal failure: it is
/// logged and reported as an opaque 500.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NoObservations { detail } => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody { error: detail }),
            )
                .into_response(),
            other => {
                error!("Request failed: {:#}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
