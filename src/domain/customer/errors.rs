// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer not found with id: {0}")]
    NotFound(String),

    #[error("Customer already exists with email: {0}")]
    Duplicate(String),

    #[error("Customer store failure: {0}")]
    Store(#[from] anyhow::Error),
}

impl CustomerError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            CustomerError::NotFound(_) => "not_found",
            CustomerError::Duplicate(_) => "duplicate",
            CustomerError::Store(_) => "error",
        }
    }
}
