//! Error types for the gamification engine and the progress store boundary

/// Error type for progress store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access progress data: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt progress record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Rejected before any load or save; no state was touched
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A load or save failed; the whole operation was aborted
    #[error("progress store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}
