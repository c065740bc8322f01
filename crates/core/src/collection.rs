//! Pure operations over the testimonial collection.
//!
//! The collection is an ordered sequence; insertion order is preserved
//! by every operation. Lookup is exact id equality.

use crate::error::CoreError;
use crate::testimonial::Testimonial;

/// Mark the testimonial with the given id as approved.
///
/// One-way transition: approve never reverts a record. Fails with
/// [`CoreError::NotFound`] when no record matches.
pub fn approve(testimonials: &mut [Testimonial], id: &str) -> Result<(), CoreError> {
    match testimonials.iter_mut().find(|t| t.id == id) {
        Some(t) => {
            t.approved = true;
            Ok(())
        }
        None => Err(CoreError::NotFound { id: id.to_string() }),
    }
}

/// Remove the testimonial with the given id, returning the removed record.
///
/// Fails with [`CoreError::NotFound`] when no record matches. The order
/// of the remaining records is unchanged.
pub fn remove(testimonials: &mut Vec<Testimonial>, id: &str) -> Result<Testimonial, CoreError> {
    match testimonials.iter().position(|t| t.id == id) {
        Some(idx) => Ok(testimonials.remove(idx)),
        None => Err(CoreError::NotFound { id: id.to_string() }),
    }
}

/// The subsequence of approved testimonials, in original order.
pub fn approved_only(testimonials: &[Testimonial]) -> Vec<Testimonial> {
    testimonials
        .iter()
        .filter(|t| t.approved)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
