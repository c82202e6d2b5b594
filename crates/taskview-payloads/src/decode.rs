use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode a single chunk as `T`
pub fn decode_chunk<T: DeserializeOwned>(chunk: &str) -> serde_json::Result<T> {
    serde_json::from_str(chunk)
}

/// Decode every chunk as `T`, in arrival order.
///
/// Stops at the first chunk that fails; callers treat any failure as
/// "the whole response is unstructured".
pub fn decode_chunks<T, S>(chunks: &[S]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: AsRef<str>,
{
    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            decode_chunk(chunk.as_ref()).map_err(|source| Error::Chunk { index, source })
        })
        .collect()
}

/// Decode the JSON-encoded parameters a task was issued with
pub fn decode_params<T: DeserializeOwned>(params: Option<&str>) -> Result<T> {
    let params = params.ok_or(Error::MissingParams)?;
    serde_json::from_str(params).map_err(Error::Params)
}
