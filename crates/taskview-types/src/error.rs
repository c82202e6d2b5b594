use thiserror::Error;

/// Result type for taskview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Error, Debug)]
pub enum Error {
    /// Task state or view model (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
