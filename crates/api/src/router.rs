//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and the integration tests use the exact same middleware stack.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`].
///
/// CORS is permissive: the API is anonymous read/write with no cookies or
/// credentials involved.
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .nest("/frases", routes::frase::router())
        // Structured request/response tracing.
        .layer(TraceLayer::new_for_http())
        // CORS.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
