//! HTTP surface of the quote server.
//!
//! A single `GET` route answers with the freshly fetched quote after it has been
//! persisted. Every other path is a bare `404`. Failures of either the provider call
//! or the insert are logged here and turned into an empty `500`; the listener keeps
//! serving.
use crate::provider::QuoteProvider;
use crate::storage::QuoteStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use quote_common::{Quote, QuoteError};
use std::sync::Arc;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<QuoteProvider>,
    pub store: QuoteStore,
}

impl AppState {
    pub fn new(provider: QuoteProvider, store: QuoteStore) -> Self {
        Self {
            provider: Arc::new(provider),
            store,
        }
    }
}

/// Error returned by handlers; always rendered as an empty `500`.
#[derive(Debug)]
pub struct InternalError(pub QuoteError);

impl From<QuoteError> for InternalError {
    fn from(err: QuoteError) -> Self {
        InternalError(err)
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Build the router serving the quote on `route`.
pub fn router(route: &str, state: AppState) -> Router {
    Router::new()
        .route(route, get(get_quote))
        .fallback(not_found)
        .with_state(state)
}

async fn get_quote(State(state): State<AppState>) -> Result<Json<Quote>, InternalError> {
    let quote = state.provider.fetch().await.inspect_err(|e| {
        error!("Could not fetch quote from {}: {}", state.provider.url(), e);
    })?;

    let id = state.store.insert(&quote).await.inspect_err(|e| {
        error!("Could not save quote {} to the history: {}", quote.bid(), e);
    })?;

    info!("Quote {} saved as row {}", quote.bid(), id);
    Ok(Json(quote))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
