// Error types
pub mod error;

// All-or-nothing chunk decoding
pub mod decode;

// Payload schemas, one module per agent command
pub mod download;
pub mod environment;
pub mod listing;
pub mod netstat;
pub mod ssh;

pub use decode::{decode_chunk, decode_chunks, decode_params};
pub use download::DownloadProgress;
pub use environment::EnvironmentVariable;
pub use listing::{
    AccessControlEntry, FileInfo, LinuxEntry, LinuxListing, LinuxPermissions, Listing, Platform,
    WindowsEntry, WindowsListing, WindowsPermissions,
};
pub use netstat::NetworkConnection;
pub use ssh::{SshArgs, SshCommand, SshEntry, SshListing, SshPermissions};

pub use error::{Error, Result};
