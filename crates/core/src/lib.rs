//! Domain layer for the testimonial store service.
//!
//! Pure types and functions only: the testimonial model, submission
//! validation, collection operations, and id generation. No I/O lives
//! here -- persistence is the `vouch-store` crate's job.

pub mod collection;
pub mod error;
pub mod id;
pub mod testimonial;
