//! Quote HTTP server.
//!
//! Serves the latest USD-BRL quote on a single endpoint. Each request is one
//! straight line through three building blocks:
//!
//! - `QuoteProvider` — fetches the quote from the third-party API under its own timeout.
//! - `QuoteStore` — appends the quote to the SQLite history under a second timeout.
//! - `routes` — the axum router tying both together and mapping failures to `500`.
//!
//! The store is opened once at startup. A failed insert is reported to the caller
//! and logged; it never stops the listener.
pub mod config;
pub mod provider;
pub mod routes;
pub mod storage;

use crate::config::ServerConfig;
use crate::provider::QuoteProvider;
use crate::routes::{AppState, router};
use crate::storage::QuoteStore;
use axum::Router;
use log::{info, warn};
use quote_common::Result;
use tokio::net::TcpListener;

/// Open the store, build the provider and return the ready router with its state.
pub fn build_app(config: &ServerConfig) -> Result<(Router, AppState)> {
    let store = QuoteStore::open(&config.db_path, config.db_timeout)?;
    info!("Quote history holds {} rows", store.count()?);
    let provider = QuoteProvider::new(config.provider_url.clone(), config.provider_timeout)?;
    let state = AppState::new(provider, store);
    Ok((router(&config.route, state.clone()), state))
}

/// Run the server until Ctrl+C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let (app, _) = build_app(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        "Quote server listening on http://{}{}",
        listener.local_addr()?,
        config.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}
