//! HTTP layer - axum router, shared state and server lifecycle.
//!
//! This module exposes the inventory over JSON. Handlers are thin: they parse the
//! request, call into `core`, and let [`crate::errors::Error`] render failures.

/// Error-to-response mapping and the `{ message }` body
pub mod error;
/// Request handlers (liveness, inventory)
pub mod handlers;

use crate::{config::settings::ServerConfig, core::code::CodeGenerator, errors::Result};
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, instrument};

/// Shared data available to all handlers.
/// Holds the store handle and the code generator used on create and rename.
#[derive(Clone)]
pub struct ApiState {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
    /// Renders scannable codes from item names
    pub codes: Arc<dyn CodeGenerator>,
}

impl ApiState {
    /// Creates a new `ApiState` from a connection and a code generator.
    #[must_use]
    pub fn new(database: DatabaseConnection, codes: Arc<dyn CodeGenerator>) -> Self {
        Self { database, codes }
    }
}

/// Builds the application router with CORS and request tracing.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route(
            "/inventory",
            get(handlers::list_inventory).post(handlers::create_item),
        )
        .route(
            "/inventory/:id",
            get(handlers::show_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves until Ctrl-C or SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
#[instrument(skip(state))]
pub async fn serve(state: ApiState, config: &ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", address, e))?;
    info!("Server running at http://{}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, stopping server.");
}
