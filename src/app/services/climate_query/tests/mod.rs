//! Shared test fixtures for climate query tests
//!
//! Builds seeded in-memory SQLite datasets mirroring the production schema:
//! a `station` roster table and a `measurement` table of dated readings.

use crate::app::services::climate_query::ClimateQuery;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub mod query_tests;

/// Create an empty in-memory dataset with the production schema
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database, so a larger pool would scatter the
/// seeded rows.
pub async fn empty_dataset() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            elevation REAL
        )",
    )
    .execute(&pool)
    .await
    .expect("station table should create");

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL REFERENCES station (station),
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("measurement table should create");

    pool
}

/// Insert a station roster row
pub async fn insert_station(pool: &SqlitePool, station: &str, name: &str) {
    sqlx::query("INSERT INTO station (station, name) VALUES (?, ?)")
        .bind(station)
        .bind(name)
        .execute(pool)
        .await
        .expect("station row should insert");
}

/// Insert a measurement row
pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: f64,
) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .expect("measurement row should insert");
}

/// Build a small two-station dataset spanning several years
///
/// Station A is the more active station (four rows against two) and its
/// most recent date is 2017-08-23, so its one-year window starts at
/// 2016-08-23.
pub async fn seeded_service() -> ClimateQuery {
    let pool = empty_dataset().await;

    insert_station(&pool, "STATION_A", "Windward Ridge").await;
    insert_station(&pool, "STATION_B", "Leeward Flats").await;

    // Old rows well outside any one-year window
    insert_measurement(&pool, "STATION_A", "2014-03-01", Some(0.10), 65.0).await;
    insert_measurement(&pool, "STATION_B", "2014-03-01", Some(0.20), 67.0).await;

    // Recent rows for the active station
    insert_measurement(&pool, "STATION_A", "2016-09-01", Some(0.05), 71.0).await;
    insert_measurement(&pool, "STATION_A", "2017-01-15", None, 63.0).await;
    insert_measurement(&pool, "STATION_A", "2017-08-23", Some(0.45), 81.0).await;

    // A competing reading on a shared date; inserted after STATION_A's row
    insert_measurement(&pool, "STATION_B", "2017-08-23", Some(0.08), 76.0).await;

    ClimateQuery::new(pool)
}
