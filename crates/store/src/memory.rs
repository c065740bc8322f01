//! In-memory store, used as the substitution point in tests.

use async_trait::async_trait;
use tokio::sync::Mutex;
use vouch_core::testimonial::Testimonial;

use crate::{StoreError, TestimonialStore};

/// Holds the collection in memory behind a mutex.
///
/// Same whole-collection semantics as [`crate::FileStore`], minus the
/// file. Useful wherever a test wants a real store without touching
/// the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    testimonials: Mutex<Vec<Testimonial>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing collection.
    pub fn with_testimonials(testimonials: Vec<Testimonial>) -> Self {
        Self {
            testimonials: Mutex::new(testimonials),
        }
    }
}

#[async_trait]
impl TestimonialStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(self.testimonials.lock().await.clone())
    }

    async fn save(&self, testimonials: &[Testimonial]) -> Result<(), StoreError> {
        *self.testimonials.lock().await = testimonials.to_vec();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
