//! Data models for the climate observation dataset
//!
//! This module contains the row structures for the `station` and
//! `measurement` tables along with the projection and aggregate types
//! returned by the query service.

use serde::Serialize;
use sqlx::FromRow;

// =============================================================================
// Table Rows
// =============================================================================

/// A fixed weather-recording location
///
/// One row per physical station. The `station` column is the textual
/// identifier that measurements reference (e.g. "USC00519281"); `id` is the
/// table's synthetic row id.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Station {
    /// Synthetic primary key
    pub id: i64,

    /// Station identifier referenced by measurements
    pub station: String,

    /// Human-readable station name
    pub name: String,

    /// Latitude in WGS84 decimal degrees (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in WGS84 decimal degrees (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Elevation above sea level in meters (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

/// A dated reading tied to a station
///
/// Many rows per station, one per date-observation. Dates are ISO
/// `YYYY-MM-DD` strings; lexicographic order is chronological.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    /// Synthetic primary key
    pub id: i64,

    /// Identifier of the station that recorded this reading
    pub station: String,

    /// Observation date as an ISO `YYYY-MM-DD` string
    pub date: String,

    /// Precipitation amount, absent when not recorded
    pub prcp: Option<f64>,

    /// Temperature observation (tobs)
    pub tobs: f64,
}

// =============================================================================
// Query Projections
// =============================================================================

/// Station roster entry: identifier and name only
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StationSummary {
    pub station: String,
    pub name: String,
}

/// A dated precipitation reading
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A dated temperature observation
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Measurement row count for a station, used to rank station activity
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}

// =============================================================================
// Aggregates
// =============================================================================

/// Min/max/average temperature over a date range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl TemperatureSummary {
    /// Build a summary from raw aggregate columns.
    ///
    /// SQLite reports NULL for all three aggregates when no rows match the
    /// range filter; that case is reported as `None` so callers can surface
    /// the not-found path.
    pub fn from_aggregates(
        min: Option<f64>,
        max: Option<f64>,
        avg: Option<f64>,
    ) -> Option<Self> {
        match (min, max, avg) {
            (Some(min), Some(max), Some(avg)) => Some(Self { min, max, avg }),
            _ => None,
        }
    }
}
