//! Configuration management and validation.
//!
//! Provides the server configuration structure with defaults, builder-style
//! setters, and validation of connection settings.

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Server configuration for the climate API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection URL for the observation dataset
    pub database_url: String,

    /// Address the HTTP server binds to
    pub bind_address: IpAddr,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Maximum connections held by the database pool
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS
                .parse()
                .expect("default bind address is a valid IP"),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Create configuration with a custom database URL
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    /// Create configuration with a custom bind address
    pub fn with_bind_address(mut self, bind_address: IpAddr) -> Self {
        self.bind_address = bind_address;
        self
    }

    /// Create configuration with a custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create configuration with a custom pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Socket address the server will listen on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.database_url.is_empty() {
            return Err(Error::configuration("Database URL cannot be empty"));
        }

        if self.port == 0 {
            return Err(Error::configuration("Port must be greater than 0"));
        }

        if self.max_connections == 0 {
            return Err(Error::configuration(
                "Maximum connections must be greater than 0",
            ));
        }

        Ok(())
    }
}
