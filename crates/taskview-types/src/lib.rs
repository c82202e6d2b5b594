pub mod error;
pub mod task;
pub mod view;

pub use error::{Error, Result};
pub use task::*;
pub use view::*;
