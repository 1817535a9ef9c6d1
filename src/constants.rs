//! Application constants for the climate API
//!
//! Default server settings, route paths, and date handling constants used
//! throughout the service.

// =============================================================================
// Server Defaults
// =============================================================================

/// Default SQLite database URL (read-only dataset in the working directory)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://climate.sqlite";

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum connections in the SQLite pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// Routes
// =============================================================================

/// Versioned API prefix shared by all query endpoints
pub const API_BASE: &str = "/api/v1.0";

/// Route paths advertised by the index endpoint, in display order
pub const ROUTE_LIST: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

// =============================================================================
// Dates
// =============================================================================

/// ISO date format used for measurement dates throughout the dataset.
/// Lexicographic comparison of dates in this format is chronological.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of the observation window in calendar months
pub const OBSERVATION_WINDOW_MONTHS: u32 = 12;
