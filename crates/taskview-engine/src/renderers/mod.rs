mod common;
mod download;
mod environment;
mod listing;
mod netstat;
mod ssh;

pub use download::DownloadRenderer;
pub use environment::EnvironmentRenderer;
pub use listing::ListingRenderer;
pub use netstat::NetstatRenderer;
pub use ssh::SshRenderer;

