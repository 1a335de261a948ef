//! Drafter HTTP API.
//!
//! Exposes the draft context over axum: create a draft, pick from it, and
//! load its current state.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::drafts::router())
        .layer(TraceLayer::new_for_http())
        // TODO: Replace CorsLayer::permissive() with restricted origins for production.
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
