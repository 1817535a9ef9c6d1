//! Read-only query service over the climate observation dataset
//!
//! This module provides `ClimateQuery`, the service that owns the SQLite
//! connection pool and answers the fixed set of observation queries:
//! recent precipitation, the station roster, temperature observations for
//! the most active station, and min/max/average temperature over a date
//! range.
//!
//! Measurement dates are ISO `YYYY-MM-DD` strings and all range filters
//! compare them lexicographically, which is chronological for that format.
//! Start and end values supplied by callers are deliberately not validated:
//! a malformed date compares against no rows and surfaces as the
//! no-observations error rather than a distinct bad-request signal.

use crate::app::models::TemperatureSummary;
use crate::config::Config;
use crate::{Error, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub mod queries;
pub mod window;

#[cfg(test)]
pub mod tests;

pub use window::ObservationWindow;

/// Query service over the `station` and `measurement` tables
///
/// Cloning is cheap: the inner pool is shared. The service never writes to
/// the dataset.
#[derive(Debug, Clone)]
pub struct ClimateQuery {
    pub(crate) pool: SqlitePool,
}

impl ClimateQuery {
    /// Wrap an existing connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a connection pool for the configured dataset
    pub async fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                Error::database(
                    format!("failed to open dataset at '{}'", config.database_url),
                    e,
                )
            })?;

        info!("Connected to dataset at {}", config.database_url);
        Ok(Self::new(pool))
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Precipitation readings from the final year of the dataset
    ///
    /// Anchors a one-year window on the most recent measurement date and
    /// returns an ordered `{date: prcp}` mapping for every row inside it.
    /// Dates reported by multiple stations collapse to a single entry, last
    /// row wins. An empty dataset yields an empty mapping.
    pub async fn recent_precipitation(&self) -> Result<BTreeMap<String, Option<f64>>> {
        let Some(anchor) = self.most_recent_date().await? else {
            debug!("Dataset contains no measurements, returning empty precipitation map");
            return Ok(BTreeMap::new());
        };

        let window = ObservationWindow::ending_at(&anchor)?;
        let readings = self.precipitation_since(&window.cutoff).await?;

        let mut precipitation = BTreeMap::new();
        for reading in readings {
            precipitation.insert(reading.date, reading.prcp);
        }

        debug!(
            "Precipitation window {} ..= {}: {} distinct dates",
            window.cutoff,
            window.anchor,
            precipitation.len()
        );
        Ok(precipitation)
    }

    /// Temperature observations from the final year of the most active station
    ///
    /// Ranks stations by measurement count, anchors a one-year window on the
    /// winning station's most recent date, and returns its `{date: tobs}`
    /// readings inside the window in ascending date order.
    pub async fn recent_observations(&self) -> Result<BTreeMap<String, f64>> {
        let activity = self
            .most_active_station()
            .await?
            .ok_or_else(|| Error::no_observations("dataset contains no measurements"))?;

        let anchor = self
            .latest_date_for_station(&activity.station)
            .await?
            .ok_or_else(|| {
                Error::no_observations(format!(
                    "station {} has no dated measurements",
                    activity.station
                ))
            })?;

        let window = ObservationWindow::ending_at(&anchor)?;
        let readings = self
            .temperatures_for_station_since(&activity.station, &window.cutoff)
            .await?;

        debug!(
            "Station {} ({} rows) window {} ..= {}: {} observations",
            activity.station,
            activity.observation_count,
            window.cutoff,
            window.anchor,
            readings.len()
        );

        let mut observations = BTreeMap::new();
        for reading in readings {
            observations.insert(reading.date, reading.tobs);
        }
        Ok(observations)
    }

    /// Min/max/average temperature for dates on or after `start`, optionally
    /// bounded by `end` inclusive
    ///
    /// Returns the no-observations error when the filter matches no rows,
    /// which includes malformed date strings that compare past every row.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary> {
        let (min, max, avg) = self.temperature_aggregates(start, end).await?;

        TemperatureSummary::from_aggregates(min, max, avg).ok_or_else(|| match end {
            Some(end) => Error::no_observations(format!(
                "no temperature observations between {start} and {end}"
            )),
            None => Error::no_observations(format!(
                "no temperature observations on or after {start}"
            )),
        })
    }
}
