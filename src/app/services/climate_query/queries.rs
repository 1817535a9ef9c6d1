//! Row-level SQL queries against the observation dataset
//!
//! Low-level fetches used by the service operations in the parent module.
//! All date filters compare ISO date strings lexicographically.

use super::ClimateQuery;
use crate::app::models::{
    PrecipitationReading, StationActivity, StationSummary, TemperatureReading,
};
use crate::Result;

impl ClimateQuery {
    /// Most recent measurement date across all stations
    pub async fn most_recent_date(&self) -> Result<Option<String>> {
        let date = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(date)
    }

    /// All precipitation readings on or after `cutoff`, in date order
    pub async fn precipitation_since(&self, cutoff: &str) -> Result<Vec<PrecipitationReading>> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date, id",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    /// The full station roster, unfiltered
    pub async fn list_stations(&self) -> Result<Vec<StationSummary>> {
        let stations =
            sqlx::query_as::<_, StationSummary>("SELECT station, name FROM station ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(stations)
    }

    /// The station with the highest measurement count
    ///
    /// Ties are broken by arbitrary row order; `None` when the measurement
    /// table is empty.
    pub async fn most_active_station(&self) -> Result<Option<StationActivity>> {
        let activity = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(*) AS observation_count \
             FROM measurement \
             GROUP BY station \
             ORDER BY observation_count DESC \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(activity)
    }

    /// Most recent measurement date recorded by a single station
    pub async fn latest_date_for_station(&self, station: &str) -> Result<Option<String>> {
        let date = sqlx::query_scalar::<_, Option<String>>(
            "SELECT MAX(date) FROM measurement WHERE station = ?",
        )
        .bind(station)
        .fetch_one(&self.pool)
        .await?;
        Ok(date)
    }

    /// Temperature observations for one station on or after `cutoff`,
    /// ascending by date
    pub async fn temperatures_for_station_since(
        &self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<TemperatureReading>> {
        let readings = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, tobs FROM measurement \
             WHERE station = ? AND date >= ? \
             ORDER BY date",
        )
        .bind(station)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    /// Raw min/max/avg temperature aggregates over a date range
    ///
    /// All three columns are NULL when no rows match, which SQLite reports
    /// as a single all-NULL row.
    pub async fn temperature_aggregates(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<(Option<f64>, Option<f64>, Option<f64>)> {
        let aggregates = match end {
            Some(end) => {
                sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
                    "SELECT MIN(tobs), MAX(tobs), AVG(tobs) \
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
                    "SELECT MIN(tobs), MAX(tobs), AVG(tobs) \
                     FROM measurement WHERE date >= ?",
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(aggregates)
    }
}
