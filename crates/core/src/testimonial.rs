//! The testimonial record and its submission payload.
//!
//! Validation is presence-based only: a submission is rejected when any
//! of `name`, `role`, `feedback` is absent or an empty string. No
//! trimming, length, or format checks -- optional fields pass through
//! untouched.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Error message returned when a required submission field is missing.
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";

/// A stored testimonial record.
///
/// `id` is assigned by the server on creation and never changes.
/// `approved` starts `false` and is only ever flipped to `true` by the
/// approve operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub feedback: String,
    pub photo: Option<String>,
    pub linkedin: Option<String>,
    pub approved: bool,
}

/// Incoming submission payload for `POST /api/testimonials`.
///
/// Required fields arrive as `Option<String>` so that an absent key and
/// an empty string are both detectable and both rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTestimonial {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl NewTestimonial {
    /// Validate the submission and build the stored record.
    ///
    /// Fails with [`CoreError::Validation`] when any of `name`, `role`,
    /// `feedback` is absent or empty. The new record is unapproved.
    pub fn into_testimonial(self, id: String) -> Result<Testimonial, CoreError> {
        let name = require_field(self.name)?;
        let role = require_field(self.role)?;
        let feedback = require_field(self.feedback)?;

        Ok(Testimonial {
            id,
            name,
            role,
            feedback,
            photo: self.photo,
            linkedin: self.linkedin,
            approved: false,
        })
    }
}

/// Extract a required field, rejecting both `None` and `""`.
fn require_field(value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(CoreError::Validation(MSG_MISSING_FIELDS.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
