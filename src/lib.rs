//! Climate API Library
//!
//! A read-only HTTP API over a relational dataset of weather stations and
//! their dated observations (precipitation and temperature).
//!
//! This library provides:
//! - Typed query operations over the `station` and `measurement` tables
//! - One-year observation window arithmetic anchored on the dataset's
//!   most recent date
//! - An axum router exposing the fixed query endpoints as JSON
//! - A CLI for running the server with structured logging

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod http;
    pub mod models;
    pub mod services {
        pub mod climate_query;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Measurement, Station, TemperatureSummary};
pub use app::services::climate_query::ClimateQuery;
pub use config::Config;

/// Result type alias for the climate API
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for climate API operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Database query or connection failure
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date parsing error for values read from the dataset
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A query matched no observations
    #[error("No observations found: {detail}")]
    NoObservations { detail: String },

    /// Server socket or transport failure
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date parsing error with context
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a no-observations error
    pub fn no_observations(detail: impl Into<String>) -> Self {
        Self::NoObservations {
            detail: detail.into(),
        }
    }

    /// Create a server error with context
    pub fn server(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Database {
            message: "query failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "date parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Server {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
