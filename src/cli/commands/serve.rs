//! Serve command: run the HTTP server until cancelled

use crate::app::http::router;
use crate::app::services::climate_query::ClimateQuery;
use crate::cli::args::ServeArgs;
use crate::cli::commands::shared::setup_logging;
use crate::{Error, Result};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Run the HTTP server over the configured dataset
///
/// Binds the listener, serves requests, and shuts down gracefully when the
/// cancellation token fires (Ctrl+C in `main`).
pub async fn run_serve(args: ServeArgs, cancellation_token: CancellationToken) -> Result<()> {
    args.validate()?;
    setup_logging(&args)?;

    let config = args.to_config();
    let service = ClimateQuery::connect(&config).await?;
    let app = router(service);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("failed to bind {addr}"), e))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(cancellation_token.cancelled_owned())
        .await
        .map_err(|e| Error::server("server terminated abnormally", e))?;

    info!("Server stopped");
    Ok(())
}
