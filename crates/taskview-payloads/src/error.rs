use thiserror::Error;

/// Result type for taskview-payloads operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding agent output
#[derive(Error, Debug)]
pub enum Error {
    /// A response chunk did not decode as the expected payload
    #[error("chunk {index} is not a valid payload: {source}")]
    Chunk {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The task's original parameters did not decode
    #[error("task parameters are not valid: {0}")]
    Params(#[source] serde_json::Error),

    /// The task carries no original parameters
    #[error("task has no original parameters")]
    MissingParams,
}

impl Error {
    /// Index of the chunk that failed, if the failure came from a chunk
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            Error::Chunk { index, .. } => Some(*index),
            Error::Params(_) | Error::MissingParams => None,
        }
    }
}
