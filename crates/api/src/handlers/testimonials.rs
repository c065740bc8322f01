//! Handlers for the `/testimonials` resource.
//!
//! Every mutating handler performs a full load → mutate → save cycle
//! against the store; there is no partial update. Concurrent mutations
//! race and the last writer wins -- an accepted property of the design,
//! documented in DESIGN.md.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vouch_core::collection;
use vouch_core::testimonial::{NewTestimonial, Testimonial};

use crate::error::AppResult;
use crate::response::{MessageResponse, MSG_APPROVED, MSG_DELETED, MSG_SUBMITTED};
use crate::state::AppState;

/// GET /api/testimonials
///
/// List the full collection, approved and unapproved, in insertion order.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.store.load().await?;
    Ok(Json(testimonials))
}

/// GET /api/testimonials/approved
///
/// The public subset: only records with `approved == true`.
pub async fn list_approved(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.store.load().await?;
    Ok(Json(collection::approved_only(&testimonials)))
}

/// POST /api/testimonials
///
/// Submit a new testimonial. Returns 201 with a pending-approval
/// message, or 400 if any of name/role/feedback is absent or empty.
/// Validation runs before the store is touched, so a rejected
/// submission leaves the collection unchanged.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<NewTestimonial>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = state.ids.generate();
    let testimonial = input.into_testimonial(id)?;

    let mut testimonials = state.store.load().await?;
    testimonials.push(testimonial);
    state.store.save(&testimonials).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MSG_SUBMITTED,
        }),
    ))
}

/// PATCH /api/testimonials/{id}/approve
///
/// Flip the matching record's `approved` flag to `true`. Returns 404
/// if no record has the given id.
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let mut testimonials = state.store.load().await?;
    collection::approve(&mut testimonials, &id)?;
    state.store.save(&testimonials).await?;

    Ok(Json(MessageResponse {
        message: MSG_APPROVED,
    }))
}

/// DELETE /api/testimonials/{id}
///
/// Remove the matching record. Returns 404 if no record has the given
/// id -- repeat deletes of the same id therefore 404 as well.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let mut testimonials = state.store.load().await?;
    let removed = collection::remove(&mut testimonials, &id)?;
    state.store.save(&testimonials).await?;

    tracing::debug!(id = %removed.id, "Testimonial deleted");

    Ok(Json(MessageResponse {
        message: MSG_DELETED,
    }))
}
