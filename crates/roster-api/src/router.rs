//! Axum router construction for the roster API.
//!
//! Layers wrap the routes from the outside in:
//!
//! ```text
//! CatchPanicLayer -> TraceLayer -> request_context -> handler
//! ```
//!
//! A panicking handler is turned into a `500` with the standard error body.

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::request_context;
use crate::state::AppState;

/// Build the complete Axum router for the roster server.
///
/// The router includes:
/// - `GET /ready` -- readiness probe
/// - `GET /roster/{id}` -- roster with both partitions
/// - `GET /roster/{id}/{status}` -- active or benched players only
/// - `POST /players/add` -- insert a benched player
/// - `PATCH /players/update` -- sparse player update
/// - `PATCH /players/change` -- swap an active and a benched player
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ready", get(handlers::ready))
        .route("/roster/{id}", get(handlers::get_roster))
        .route("/roster/{id}/{status}", get(handlers::get_players))
        .route("/players/add", post(handlers::add_player))
        .route("/players/update", patch(handlers::update_player))
        .route("/players/change", patch(handlers::change_players))
        .fallback(handlers::not_found)
        .layer(from_fn(request_context))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    let body = serde_json::json!({
        "error": "internal_error",
        "message": "internal error",
    });
    (axum::http::StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
