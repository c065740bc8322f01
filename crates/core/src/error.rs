#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Testimonial not found: {id}")]
    NotFound { id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
