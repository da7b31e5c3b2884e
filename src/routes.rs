//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check (public)
//! - `GET  /get-*`, `/search`, `/total-hotels` - Hotel reads (public)
//! - `POST /add-hotel`, `PUT /update-hotel`, `DELETE /delete-*` - Hotel writes
//!   (Bearer token required, admin role checked per handler)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on write routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the route table with state and middleware applied.
///
/// Integration tests drive this router directly.
pub fn build_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing
/// slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
