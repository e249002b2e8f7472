//! HTTP surface
//!
//! Thin axum layer over the [`Registry`]: the router, shared state, and the
//! serve loop with graceful shutdown.

pub mod handlers;
pub mod query;
mod response;

use crate::core::Registry;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Build the application router over `registry`
pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/statement", get(handlers::statement))
        .route("/deposit", get(handlers::deposit))
        .route("/withdraw", get(handlers::withdraw))
        .route("/transfer", get(handlers::transfer))
        .route("/health", get(handlers::health))
        .with_state(AppState { registry })
}

/// Serve requests on `listener` until Ctrl+C is received
pub async fn serve(listener: TcpListener, registry: Arc<Registry>) -> anyhow::Result<()> {
    axum::serve(listener, router(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => {
            warn!(%error, "cannot listen for Ctrl+C; serving until the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
