//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints answer with a `{ "message": ... }` body. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` so the
//! wire messages live in one place.

use serde::Serialize;

/// Standard `{ "message": ... }` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// 201 body for a successful submission. Deliberately omits the new
/// record's id: the caller is only told the submission awaits approval.
pub const MSG_SUBMITTED: &str = "Testimonial submitted for approval";

/// 200 body for a successful approval.
pub const MSG_APPROVED: &str = "Testimonial approved";

/// 200 body for a successful deletion.
pub const MSG_DELETED: &str = "Testimonial deleted";
