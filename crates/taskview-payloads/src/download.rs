use serde::Deserialize;

/// Progress report sent while a `download` task is still transferring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DownloadProgress {
    pub total_chunks: u64,
}
