use super::common::{
    actions_header, metadata_header, metadata_hover_text, metadata_title, name_cell, size_cell,
};
use crate::gate;
use crate::registry::TaskKind;
use crate::time::{TimestampUnit, ViewerContext};
use crate::traits::ResponseRenderer;
use indexmap::IndexMap;
use taskview_payloads::{SshArgs, SshCommand, SshEntry, SshListing, decode_chunks, decode_params};
use taskview_types::{
    ActionDescriptor, Cell, Header, Row, SshOperation, SshSession, Table, TaskParameters,
    TaskState, ViewModel,
};
use tracing::{debug, trace};

/// Output of the `ssh` command: a remote listing, a fetched file, or text
pub struct SshRenderer;

fn task_args(task: &TaskState) -> Option<SshArgs> {
    match decode_params(task.original_params.as_deref()) {
        Ok(args) => Some(args),
        Err(err) => {
            debug!(error = %err, "ssh task parameters did not decode");
            None
        }
    }
}

impl ResponseRenderer for SshRenderer {
    fn kind(&self) -> TaskKind {
        TaskKind::Ssh
    }

    fn completes_as_download(&self, task: &TaskState) -> bool {
        task_args(task).is_some_and(|args| args.command() == SshCommand::Download)
    }

    fn render_chunks(
        &self,
        task: &TaskState,
        chunks: &[String],
        viewer: &ViewerContext,
    ) -> ViewModel {
        let Some(args) = task_args(task) else {
            return gate::raw_text(chunks);
        };

        match args.command() {
            SshCommand::List => render_listing(&args.session, chunks, viewer),
            SshCommand::Download | SshCommand::Other => gate::joined_lines(chunks),
        }
    }
}

fn render_listing(session: &SshSession, chunks: &[String], viewer: &ViewerContext) -> ViewModel {
    let listings: Vec<SshListing> = match decode_chunks(chunks) {
        Ok(listings) => listings,
        Err(err) => {
            debug!(error = %err, chunk = ?err.chunk_index(), "ssh listing did not decode");
            return gate::raw_text(chunks);
        }
    };

    let Some(first) = listings.first() else {
        return gate::raw_text(chunks);
    };
    let mut table = Table::new(title(session, first), headers());

    for entry in listings.iter().flat_map(|listing| &listing.files) {
        table.push_row(row(session, entry, viewer));
    }

    if table.is_empty() {
        return gate::raw_text(chunks);
    }
    trace!(rows = table.rows.len(), host = %session.host, "rendered remote listing");
    ViewModel::Table(table)
}

/// `Listing for <account>@<host>:<path>`, empty when the directory is unnamed
fn title(session: &SshSession, listing: &SshListing) -> String {
    let Some(path) = listing.directory_path() else {
        return String::new();
    };
    match session.credentials.get("account").and_then(|a| a.as_str()) {
        Some(account) => format!("Listing for {account}@{}:{path}", session.host),
        None => format!("Listing for {}:{path}", session.host),
    }
}

pub fn headers() -> Vec<Header> {
    vec![
        actions_header(),
        Header::string("name").fill_width(),
        Header::size("size").with_width(150),
        Header::string("uid").with_width(100),
        Header::string("gid").with_width(100),
        Header::string("permissions").with_width(150),
        Header::string("last modified").fill_width(),
        metadata_header(),
    ]
}

fn actions(session: &SshSession, entry: &SshEntry) -> Vec<ActionDescriptor> {
    let path = &entry.info.full_name;
    let is_file = entry.info.is_file;
    vec![
        ActionDescriptor::task(
            "Cat",
            "ssh",
            TaskParameters::ssh(session, SshOperation::Cat(path.clone())),
        )
        .disabled_when(!is_file),
        ActionDescriptor::task(
            "Download",
            "ssh",
            TaskParameters::ssh(session, SshOperation::Download(path.clone())),
        )
        .with_icon("download")
        .disabled_when(!is_file),
        ActionDescriptor::task(
            "Delete",
            "ssh",
            TaskParameters::ssh(session, SshOperation::Rm(path.clone())),
        )
        .with_icon("delete"),
        ActionDescriptor::task(
            "List",
            "ssh",
            TaskParameters::ssh(session, SshOperation::List(path.clone())),
        )
        .with_icon("list")
        .disabled_when(is_file),
    ]
}

fn row(session: &SshSession, entry: &SshEntry, viewer: &ViewerContext) -> Row {
    let info = &entry.info;
    let perms = &entry.permissions;

    let details = IndexMap::from([
        (
            "Last accessed".to_string(),
            viewer.format_long(info.access_time, TimestampUnit::Milliseconds),
        ),
        (
            "Last modified".to_string(),
            viewer.format_long(info.modify_time, TimestampUnit::Milliseconds),
        ),
        ("Owner UID".to_string(), perms.uid.to_string()),
        ("Owner GID".to_string(), perms.gid.to_string()),
        ("Permissions".to_string(), perms.permissions.clone()),
    ]);

    Row::new()
        .with("actions", Cell::menu(actions(session, entry)))
        .with("name", name_cell(info))
        .with("size", size_cell(info))
        .with("uid", Cell::text(perms.uid.to_string()))
        .with("gid", Cell::text(perms.gid.to_string()))
        .with("permissions", Cell::text(perms.permissions.as_str()))
        .with(
            "last modified",
            Cell::text(viewer.format_short(info.modify_time, TimestampUnit::Milliseconds)),
        )
        .with(
            "metadata",
            Cell::dictionary(metadata_title(info), metadata_hover_text(info), details),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskview_types::{Button, TaskStatus};

    const PARAMS: &str = r#"{"credentials":{"account":"root","type":"plaintext"},"agent":false,
        "host":"10.0.0.5","port":2222,"list":"/etc"}"#;

    const LISTING: &str = r#"{"host":"10.0.0.5","name":"etc","parent_path":"/",
        "files":[{"name":"passwd","full_name":"/etc/passwd","is_file":true,"size":2048,
        "access_time":1700000000000,"modify_time":1700000000000,
        "permissions":{"uid":0,"gid":0,"permissions":"-rw-r--r--"}}]}"#;

    fn task(params: &str) -> TaskState {
        TaskState::new(TaskStatus::Success)
            .mark_completed()
            .with_original_params(params)
    }

    fn render(task: &TaskState, chunks: &[&str]) -> ViewModel {
        let chunks: Vec<String> = chunks.iter().map(|c| c.to_string()).collect();
        SshRenderer.render(task, &chunks, &ViewerContext::default())
    }

    #[test]
    fn test_remote_listing() {
        let view = render(&task(PARAMS), &[LISTING]);
        let table = view.as_table().expect("table");
        assert_eq!(table.title, "Listing for root@10.0.0.5:/etc");
        assert_eq!(
            table.labels(),
            vec![
                "actions",
                "name",
                "size",
                "uid",
                "gid",
                "permissions",
                "last modified",
                "metadata"
            ]
        );

        let row = &table.rows[0];
        assert_eq!(row.get("uid").and_then(Cell::display_value).as_deref(), Some("0"));
        assert_eq!(
            row.get("last modified").and_then(Cell::display_value).as_deref(),
            Some("Tue, Nov 14, 2023 10:13:20 PM UTC")
        );
    }

    #[test]
    fn test_actions_carry_session() -> anyhow::Result<()> {
        let view = render(&task(PARAMS), &[LISTING]);
        let table = view.as_table().expect("table");
        let Some(Button::Menu(menu)) = table.rows[0].get("actions").and_then(Cell::as_button)
        else {
            panic!("expected action menu");
        };

        let delete: serde_json::Value = serde_json::from_str(&menu.value[2].encoded_parameters()?)?;
        assert_eq!(
            delete,
            serde_json::json!({
                "credentials": {"account": "root", "type": "plaintext"},
                "agent": false,
                "host": "10.0.0.5",
                "port": 2222,
                "rm": "/etc/passwd"
            })
        );
        assert!(menu.value.iter().all(|a| a.ui_feature == "ssh"));
        assert!(menu.value[3].disabled);
        Ok(())
    }

    #[test]
    fn test_download_completion() {
        let params = r#"{"host":"h","download":"/root/.ssh/id_rsa"}"#;
        let task = task(params).with_display_params("-host h -download /root/.ssh/id_rsa");
        let view = render(&task, &["agent-file-7"]);
        let download = view.as_download().expect("download");
        assert_eq!(download.agent_file_id, "agent-file-7");
        assert_eq!(download.name, "Download -host h -download /root/.ssh/id_rsa");
    }

    #[test]
    fn test_exec_output_joined() {
        let params = r#"{"host":"h","exec":"id"}"#;
        assert_eq!(
            render(&task(params), &["uid=0(root)", "gid=0(root)"]),
            ViewModel::plaintext("uid=0(root)\ngid=0(root)")
        );
    }

    #[test]
    fn test_unreadable_params_are_raw() {
        assert_eq!(
            render(&task("-host h -list /"), &["a", "b"]),
            ViewModel::plaintext("ab")
        );
    }
}
