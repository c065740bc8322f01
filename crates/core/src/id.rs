//! Id generation for new testimonials.
//!
//! Handlers depend on the [`IdGenerator`] trait rather than calling
//! `uuid` directly so tests can inject a deterministic sequence.

use uuid::Uuid;

/// Source of fresh, unique testimonial ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator: random UUID v4 rendered as a hyphenated string.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
