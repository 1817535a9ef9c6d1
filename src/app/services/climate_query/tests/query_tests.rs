//! Tests for the climate query service operations

use super::{empty_dataset, insert_measurement, insert_station, seeded_service};
use crate::app::services::climate_query::ClimateQuery;
use crate::Error;

#[tokio::test]
async fn test_most_recent_date_spans_all_stations() {
    let service = seeded_service().await;
    assert_eq!(
        service.most_recent_date().await.unwrap().as_deref(),
        Some("2017-08-23")
    );
}

#[tokio::test]
async fn test_most_recent_date_empty_dataset() {
    let service = ClimateQuery::new(empty_dataset().await);
    assert_eq!(service.most_recent_date().await.unwrap(), None);
}

#[tokio::test]
async fn test_recent_precipitation_respects_window() {
    let service = seeded_service().await;
    let precipitation = service.recent_precipitation().await.unwrap();

    // The 2014 rows fall outside the window anchored on 2017-08-23
    assert_eq!(precipitation.len(), 3);
    assert!(!precipitation.contains_key("2014-03-01"));
    assert_eq!(precipitation["2016-09-01"], Some(0.05));
    assert_eq!(precipitation["2017-01-15"], None);
}

#[tokio::test]
async fn test_recent_precipitation_shared_date_last_write_wins() {
    let service = seeded_service().await;
    let precipitation = service.recent_precipitation().await.unwrap();

    // Both stations reported on 2017-08-23; the later row replaces the earlier
    assert_eq!(precipitation["2017-08-23"], Some(0.08));
}

#[tokio::test]
async fn test_recent_precipitation_empty_dataset_is_empty_map() {
    let service = ClimateQuery::new(empty_dataset().await);
    let precipitation = service.recent_precipitation().await.unwrap();
    assert!(precipitation.is_empty());
}

#[tokio::test]
async fn test_list_stations_unfiltered() {
    let service = seeded_service().await;
    let stations = service.list_stations().await.unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].station, "STATION_A");
    assert_eq!(stations[0].name, "Windward Ridge");
    assert_eq!(stations[1].station, "STATION_B");
}

#[tokio::test]
async fn test_most_active_station_ranks_by_row_count() {
    let service = seeded_service().await;
    let activity = service.most_active_station().await.unwrap().unwrap();

    assert_eq!(activity.station, "STATION_A");
    assert_eq!(activity.observation_count, 4);
}

#[tokio::test]
async fn test_most_active_station_empty_dataset() {
    let service = ClimateQuery::new(empty_dataset().await);
    assert!(service.most_active_station().await.unwrap().is_none());
}

#[tokio::test]
async fn test_recent_observations_restricted_to_active_station() {
    let service = seeded_service().await;
    let observations = service.recent_observations().await.unwrap();

    // STATION_B's 76.0 reading on the shared date must not leak in
    assert_eq!(observations.len(), 3);
    assert_eq!(observations["2016-09-01"], 71.0);
    assert_eq!(observations["2017-01-15"], 63.0);
    assert_eq!(observations["2017-08-23"], 81.0);
}

#[tokio::test]
async fn test_recent_observations_ascending_dates() {
    let service = seeded_service().await;
    let observations = service.recent_observations().await.unwrap();

    let dates: Vec<&String> = observations.keys().collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_recent_observations_empty_dataset_is_not_found() {
    let service = ClimateQuery::new(empty_dataset().await);
    let err = service.recent_observations().await.unwrap_err();
    assert!(matches!(err, Error::NoObservations { .. }));
}

#[tokio::test]
async fn test_temperature_summary_open_range() {
    let service = seeded_service().await;
    let summary = service.temperature_summary("2017-01-01", None).await.unwrap();

    assert_eq!(summary.min, 63.0);
    assert_eq!(summary.max, 81.0);
    assert!((summary.avg - 220.0 / 3.0).abs() < 1e-9);
    assert!(summary.min <= summary.avg && summary.avg <= summary.max);
}

#[tokio::test]
async fn test_temperature_summary_closed_range() {
    let service = seeded_service().await;
    let summary = service
        .temperature_summary("2014-01-01", Some("2014-12-31"))
        .await
        .unwrap();

    assert_eq!(summary.min, 65.0);
    assert_eq!(summary.max, 67.0);
    assert_eq!(summary.avg, 66.0);
}

#[tokio::test]
async fn test_temperature_summary_no_matching_rows() {
    let service = seeded_service().await;
    let err = service
        .temperature_summary("2099-01-01", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoObservations { .. }));
}

#[tokio::test]
async fn test_temperature_summary_malformed_date_is_not_found() {
    // Malformed dates are never validated; they just match nothing
    let service = seeded_service().await;
    let err = service
        .temperature_summary("yesterday", Some("tomorrow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoObservations { .. }));
}

#[tokio::test]
async fn test_single_station_dataset_window() {
    let pool = empty_dataset().await;
    insert_station(&pool, "LONE", "Lone Peak").await;
    insert_measurement(&pool, "LONE", "2020-02-29", Some(0.3), 40.0).await;
    insert_measurement(&pool, "LONE", "2019-02-28", None, 38.0).await;

    let service = ClimateQuery::new(pool);
    let observations = service.recent_observations().await.unwrap();

    // Window anchored on the leap day starts 2019-02-28, so both rows qualify
    assert_eq!(observations.len(), 2);
    assert_eq!(observations["2019-02-28"], 38.0);
    assert_eq!(observations["2020-02-29"], 40.0);
}
