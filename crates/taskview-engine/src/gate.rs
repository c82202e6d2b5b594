//! Decisions taken before any chunk is parsed, and the raw-text fallbacks
//! every renderer degrades to.

use taskview_types::{DownloadDescriptor, TaskState, ViewModel};
use tracing::debug;

pub const NO_RESPONSE_TEXT: &str = "No response yet from agent...";
pub const NO_DATA_TEXT: &str = "No data to display...";

/// Short-circuit a render when the task state alone decides the output.
///
/// Precedence: agent-reported failure, then completed transfers (when
/// `download_on_completion`), then "nothing arrived yet".
pub fn check(
    task: &TaskState,
    chunks: &[String],
    download_on_completion: bool,
) -> Option<ViewModel> {
    if task.is_failed() {
        debug!(status = %task.status, chunks = chunks.len(), "task failed; rendering raw output");
        return Some(raw_text(chunks));
    }

    if download_on_completion && task.completed {
        return Some(match chunks.first() {
            Some(file_id) => {
                ViewModel::Download(DownloadDescriptor::new(file_id.clone(), download_name(task)))
            }
            None => ViewModel::plaintext(NO_DATA_TEXT),
        });
    }

    if chunks.is_empty() && !task.completed {
        return Some(ViewModel::plaintext(NO_RESPONSE_TEXT));
    }

    None
}

/// Every chunk concatenated verbatim, no separator
pub fn raw_text(chunks: &[String]) -> ViewModel {
    ViewModel::Plaintext(chunks.concat())
}

/// Every chunk on its own line
pub fn joined_lines(chunks: &[String]) -> ViewModel {
    ViewModel::Plaintext(chunks.join("\n"))
}

fn download_name(task: &TaskState) -> String {
    format!("Download {}", task.display_params)
        .trim_end()
        .to_string()
}
