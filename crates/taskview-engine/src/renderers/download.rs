use crate::gate;
use crate::registry::TaskKind;
use crate::time::ViewerContext;
use crate::traits::ResponseRenderer;
use taskview_payloads::{DownloadProgress, decode_chunks};
use taskview_types::{TaskState, ViewModel};
use tracing::debug;

/// `download`: transfer progress until the task completes, then the file
pub struct DownloadRenderer;

impl ResponseRenderer for DownloadRenderer {
    fn kind(&self) -> TaskKind {
        TaskKind::Download
    }

    fn completes_as_download(&self, _task: &TaskState) -> bool {
        true
    }

    fn render_chunks(
        &self,
        _task: &TaskState,
        chunks: &[String],
        _viewer: &ViewerContext,
    ) -> ViewModel {
        match decode_chunks::<DownloadProgress, _>(chunks) {
            Ok(progress) => match progress.first() {
                Some(first) => ViewModel::Plaintext(format!(
                    "Downloading a file with {} total chunks...",
                    first.total_chunks
                )),
                None => gate::raw_text(chunks),
            },
            Err(err) => {
                debug!(error = %err, chunk = ?err.chunk_index(), "progress did not decode");
                gate::raw_text(chunks)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskview_types::TaskStatus;

    fn chunks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_progress() {
        let task = TaskState::new(TaskStatus::Processing);
        let view = DownloadRenderer.render(
            &task,
            &chunks(&[r#"{"total_chunks":12}"#, r#"{"total_chunks":12}"#]),
            &ViewerContext::default(),
        );
        assert_eq!(
            view,
            ViewModel::plaintext("Downloading a file with 12 total chunks...")
        );
    }

    #[test]
    fn test_progress_garbage_is_raw() {
        let task = TaskState::new(TaskStatus::Processing);
        let view = DownloadRenderer.render(
            &task,
            &chunks(&[r#"{"total_chunks":12}"#, "chunk 2 of 12"]),
            &ViewerContext::default(),
        );
        assert_eq!(view, ViewModel::plaintext(r#"{"total_chunks":12}chunk 2 of 12"#));
    }

    #[test]
    fn test_completed_transfer() {
        let task = TaskState::new(TaskStatus::Completed)
            .mark_completed()
            .with_display_params("/etc/shadow");
        let view = DownloadRenderer.render(&task, &chunks(&["9f1c"]), &ViewerContext::default());
        let download = view.as_download().expect("download");
        assert_eq!(download.agent_file_id, "9f1c");
        assert_eq!(download.name, "Download /etc/shadow");
    }
}
