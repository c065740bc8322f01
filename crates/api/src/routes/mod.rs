pub mod health;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /testimonials                    list (GET), submit (POST)
/// /testimonials/approved           public approved subset (GET)
/// /testimonials/{id}/approve       approve (PATCH)
/// /testimonials/{id}               delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/testimonials", testimonials::router())
}
