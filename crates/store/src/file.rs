//! File-backed store: one JSON file holding the whole collection.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vouch_core::testimonial::Testimonial;

use crate::{StoreError, TestimonialStore};

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// A missing file reads as an empty collection; an unreadable or
/// unparsable file surfaces a [`StoreError`]. Every save rewrites the
/// whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TestimonialStore for FileStore {
    async fn load(&self) -> Result<Vec<Testimonial>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, testimonials: &[Testimonial]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(testimonials)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
