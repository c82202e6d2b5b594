use crate::gate;
use crate::registry::TaskKind;
use crate::time::ViewerContext;
use crate::traits::ResponseRenderer;
use taskview_payloads::{EnvironmentVariable, decode_chunks};
use taskview_types::{
    ActionDescriptor, Cell, Header, Row, Table, TaskParameters, TaskState, ViewModel,
};
use tracing::debug;

pub const TITLE: &str = "Environment Variables";

/// `getenv`: one row per variable, each removable with `unsetenv`
pub struct EnvironmentRenderer;

impl ResponseRenderer for EnvironmentRenderer {
    fn kind(&self) -> TaskKind {
        TaskKind::Getenv
    }

    fn render_chunks(
        &self,
        _task: &TaskState,
        chunks: &[String],
        _viewer: &ViewerContext,
    ) -> ViewModel {
        let batches: Vec<Vec<EnvironmentVariable>> = match decode_chunks(chunks) {
            Ok(batches) => batches,
            Err(err) => {
                debug!(error = %err, chunk = ?err.chunk_index(), "environment did not decode");
                return gate::raw_text(chunks);
            }
        };

        let mut table = Table::new(TITLE, headers());
        for var in batches.iter().flatten() {
            table.push_row(row(var));
        }

        if table.is_empty() {
            return gate::raw_text(chunks);
        }
        ViewModel::Table(table)
    }
}

pub fn headers() -> Vec<Header> {
    vec![
        Header::button("actions").with_width(120).unsortable(),
        Header::string("key").fill_width(),
        Header::string("value").fill_width(),
    ]
}

fn row(var: &EnvironmentVariable) -> Row {
    let remove = ActionDescriptor::task("Remove", "unsetenv", TaskParameters::unsetenv(&var.key))
        .with_icon("delete");

    Row::new()
        .with("actions", Cell::menu(vec![remove]))
        .with("key", Cell::copyable(var.key.as_str()))
        .with("value", Cell::copyable(var.value.as_str()))
}
