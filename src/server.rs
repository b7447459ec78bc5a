// Composition root
//
// One repository per entity type lives for the whole process; a service is
// built from it on every request.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::controllers;
use crate::repository::{BookRepository, OrderRepository};
use crate::services::{RepositoryBookService, RepositoryOrderService};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    books: Arc<BookRepository>,
    orders: Arc<OrderRepository>,
}

impl AppState {
    /// Fresh, empty repositories
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-request book service over the shared repository
    pub fn book_service(&self) -> RepositoryBookService<'_> {
        RepositoryBookService::new(&self.books)
    }

    /// Per-request order service over the shared repository
    pub fn order_service(&self) -> RepositoryOrderService<'_> {
        RepositoryOrderService::new(&self.orders)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /api/health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}

/// Every route, with CORS and request tracing applied
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(controllers::books::routes())
        .merge(controllers::orders::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `config`'s address and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("  Books:  http://{}/api/books", addr);
    info!("  Orders: http://{}/api/orders", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the only way out is killing the process
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
