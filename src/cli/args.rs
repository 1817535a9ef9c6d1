//! Command-line argument definitions for the climate API
//!
//! Defines the CLI interface using the clap derive API, with validation of
//! server settings before the runtime starts.

use crate::config::Config;
use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::net::IpAddr;

/// CLI arguments for the climate observation API server
///
/// Serves precipitation and temperature observations from a pre-populated
/// station measurement dataset over a small read-only HTTP API.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate-api",
    version,
    about = "Serve climate observations from a station measurement dataset",
    long_about = "A read-only HTTP API over a relational dataset of weather stations and their \
                  dated observations. Exposes recent precipitation, the station roster, \
                  temperature observations for the most active station, and min/max/average \
                  temperature over a requested date range."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the climate API
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the HTTP server until interrupted
    Serve(ServeArgs),
    /// Print the available API routes and exit
    Routes,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// SQLite URL of the observation dataset
    ///
    /// The dataset is opened read-only in practice: the service issues no
    /// writes. If not specified, defaults to sqlite://climate.sqlite
    #[arg(
        short = 'd',
        long = "database",
        value_name = "URL",
        default_value = DEFAULT_DATABASE_URL,
        help = "SQLite URL of the observation dataset"
    )]
    pub database_url: String,

    /// Address to bind the HTTP server to
    #[arg(
        short = 'b',
        long = "bind",
        value_name = "IP",
        default_value = DEFAULT_BIND_ADDRESS,
        help = "Address to bind the HTTP server to"
    )]
    pub bind_address: IpAddr,

    /// Port to listen on
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to listen on"
    )]
    pub port: u16,

    /// Maximum connections in the database pool
    #[arg(
        long = "max-connections",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        help = "Maximum connections in the database pool"
    )]
    pub max_connections: u32,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ServeArgs {
    /// Validate the serve command arguments for consistency
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

        if self.max_connections > 64 {
            return Err(Error::configuration(
                "Maximum connections cannot exceed 64",
            ));
        }

        Ok(())
    }

    /// Build the server configuration from these arguments
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_database_url(self.database_url.clone())
            .with_bind_address(self.bind_address)
            .with_port(self.port)
            .with_max_connections(self.max_connections)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS
                .parse()
                .expect("default bind address is a valid IP"),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            verbose: 0,
            quiet: false,
        }
    }
}
