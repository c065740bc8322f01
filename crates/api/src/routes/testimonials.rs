//! Route definitions for the `/testimonials` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /                 -> list_all
/// POST   /                 -> submit
/// GET    /approved         -> list_approved
/// PATCH  /{id}/approve     -> approve
/// DELETE /{id}             -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_all).post(testimonials::submit))
        .route("/approved", get(testimonials::list_approved))
        .route("/{id}/approve", patch(testimonials::approve))
        .route("/{id}", delete(testimonials::remove))
}
