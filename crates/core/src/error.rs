#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the subject id or the trainer code, rendered as text.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
