//! Hello API - greeting service
//!
//! Serves a greeting message with a timestamp over JSON for the greeting widget.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{load_config, Config};
pub use error::{ApiError, Result};

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve the greeting API on an already bound listener until `cancel` fires
pub async fn serve(
    listener: TcpListener,
    config: Config,
    cancel: CancellationToken,
) -> Result<()> {
    let addr = listener.local_addr()?;
    let router = routes::build_router(config);
    tracing::info!("Greeting API listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| ApiError::Server(format!("Server on {} failed: {}", addr, e)))?;

    tracing::debug!("Greeting API stopped");
    Ok(())
}

/// Run the greeting API with the given configuration until ctrl-c
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::Server(format!("Failed to bind greeting API to {}: {}", addr, e)))?;

    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(listener, config, cancel).await
}
