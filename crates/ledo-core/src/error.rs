use thiserror::Error;

/// Top-level error type for the ledo-core crate and dependents.
///
/// Tokenizing and comparing never fail; these variants cover caller defects
/// at the edges (configuration parsing and the C boundary).
#[derive(Debug, Error)]
pub enum LedoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, LedoError>;
