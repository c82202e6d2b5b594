use crate::gate;
use crate::registry::TaskKind;
use crate::time::ViewerContext;
use taskview_types::{TaskState, ViewModel};

/// Response-to-view transformation for one task command
///
/// Responsibilities:
/// - Declare whether a completed task is a finished file transfer
/// - Decode the chunks and reshape them into a view model
///
/// Implementations are stateless: the same inputs always produce the same view.
pub trait ResponseRenderer: Send + Sync {
    fn kind(&self) -> TaskKind;

    /// Completed tasks of this kind render as a download of the first chunk
    fn completes_as_download(&self, _task: &TaskState) -> bool {
        false
    }

    /// Build the view once the gate has let the task through
    fn render_chunks(&self, task: &TaskState, chunks: &[String], viewer: &ViewerContext)
    -> ViewModel;

    fn render(&self, task: &TaskState, chunks: &[String], viewer: &ViewerContext) -> ViewModel {
        if let Some(view) = gate::check(task, chunks, self.completes_as_download(task)) {
            return view;
        }
        self.render_chunks(task, chunks, viewer)
    }
}
