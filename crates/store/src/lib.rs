//! Persistence layer for the testimonial store service.
//!
//! The collection is read and written wholesale: `load` returns the
//! full ordered sequence and `save` rewrites it. There is no partial or
//! indexed update, no locking, and no transaction -- concurrent
//! mutations race and the last writer wins.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use vouch_core::testimonial::Testimonial;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Whole-collection persistence.
///
/// Handlers hold this as `Arc<dyn TestimonialStore>` so tests can swap
/// the file-backed store for [`MemoryStore`].
#[async_trait]
pub trait TestimonialStore: Send + Sync {
    /// Load the full ordered collection. A store with no data yet
    /// yields an empty collection, not an error.
    async fn load(&self) -> Result<Vec<Testimonial>, StoreError>;

    /// Replace the persisted collection with `testimonials`.
    async fn save(&self, testimonials: &[Testimonial]) -> Result<(), StoreError>;
}
