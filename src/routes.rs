//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: storage and session store (public)
//! - `/api/*`        - REST API, partly behind a cookie session
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - `sid` cookie session on protected routes
//! - **Body limit** - Caps JSON request bodies
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{session, tracing};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and middleware except path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `body_limit` - maximum accepted request body in bytes
pub fn router(state: AppState, body_limit: usize) -> Router {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        session::layer,
    ));

    let api_router = api::routes::public_routes().merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Same as [`router`] with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, body_limit: usize) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, body_limit))
}
