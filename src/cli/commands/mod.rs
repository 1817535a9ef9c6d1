//! Command implementations for the climate API CLI
//!
//! Dispatches parsed CLI arguments to the individual command modules:
//! - `serve`: run the HTTP server until cancelled
//! - `routes`: print the advertised route listing

pub mod serve;
pub mod shared;

use crate::app::http::handlers::route_listing;
use crate::cli::args::{Args, Commands};
use crate::Result;
use tokio_util::sync::CancellationToken;

/// Main command runner for the climate API
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    match args.get_command() {
        Commands::Serve(serve_args) => serve::run_serve(serve_args, cancellation_token).await,
        Commands::Routes => {
            print!("{}", route_listing());
            Ok(())
        }
    }
}
