// Engine module - turns raw agent task output into console view models
// This layer sits between decoded payloads (payloads) and the output contract (types)

pub mod category;
pub mod error;
pub mod gate;
pub mod registry;
pub mod renderers;
pub mod time;
pub mod traits;

pub use category::{FileCategory, classify, classify_file, extension_of};
pub use error::{Error, Result};
pub use registry::{
    RendererMetadata, TaskKind, create_renderer, create_renderer_for, get_all_renderers,
};
pub use time::{TimestampUnit, ViewerContext};
pub use traits::ResponseRenderer;

use taskview_types::{TaskState, ViewModel};

// Façade API - stable entry points for the CLI layer

/// Render the responses of a task of a known kind. Never fails: anything
/// that cannot be rendered structurally comes back as plaintext.
pub fn transform(
    kind: TaskKind,
    task: &TaskState,
    responses: &[String],
    viewer: &ViewerContext,
) -> ViewModel {
    create_renderer(kind).render(task, responses, viewer)
}

/// Same as [`transform`], resolving the renderer from the command name
pub fn transform_command(
    command: &str,
    task: &TaskState,
    responses: &[String],
    viewer: &ViewerContext,
) -> Result<ViewModel> {
    let kind: TaskKind = command.parse()?;
    Ok(transform(kind, task, responses, viewer))
}
