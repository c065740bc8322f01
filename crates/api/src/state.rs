use std::sync::Arc;

use vouch_core::id::IdGenerator;
use vouch_store::TestimonialStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store
/// and id generator are trait objects so tests can substitute an
/// in-memory store and a deterministic id sequence.
#[derive(Clone)]
pub struct AppState {
    /// Whole-collection persistence backend.
    pub store: Arc<dyn TestimonialStore>,
    /// Source of fresh testimonial ids.
    pub ids: Arc<dyn IdGenerator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
