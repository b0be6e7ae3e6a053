//! Listener lifecycle.

use std::sync::Arc;

use anyhow::Context;
use herald_config::ServerConfig;
use tokio::net::TcpListener;

use crate::{AppContext, routes};

/// Bind `server` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(ctx: AppContext, server: &ServerConfig) -> anyhow::Result<()> {
    let app = routes::router(Arc::new(ctx), server);

    let addr = server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, path = %server.webhook_path, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
