use thiserror::Error;

/// Result type for taskview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rendering itself never fails; errors only come from resolving what to render
#[derive(Error, Debug)]
pub enum Error {
    /// No renderer is registered for the command
    #[error("no renderer for command '{0}'")]
    UnknownCommand(String),
}
