use super::common::{
    action_path, actions_header, metadata_header, metadata_hover_text, metadata_title, name_cell,
    size_cell, title_for,
};
use crate::gate;
use crate::registry::TaskKind;
use crate::time::{TimestampUnit, ViewerContext};
use crate::traits::ResponseRenderer;
use indexmap::IndexMap;
use taskview_payloads::{FileInfo, LinuxEntry, Listing, Platform, WindowsEntry, decode_chunks};
use taskview_types::{
    ActionDescriptor, Cell, Header, Row, SubTable, Table, TaskParameters, TaskState, ViewModel,
};
use tracing::{debug, trace, warn};

/// File browser listing (`ls`), dispatched on the platform tag of the payload
pub struct ListingRenderer;

impl ResponseRenderer for ListingRenderer {
    fn kind(&self) -> TaskKind {
        TaskKind::Ls
    }

    fn render_chunks(
        &self,
        _task: &TaskState,
        chunks: &[String],
        viewer: &ViewerContext,
    ) -> ViewModel {
        let listings: Vec<Listing> = match decode_chunks(chunks) {
            Ok(listings) => listings,
            Err(err) => {
                debug!(error = %err, chunk = ?err.chunk_index(), "listing did not decode");
                return gate::raw_text(chunks);
            }
        };

        let Some(first) = listings.first() else {
            return gate::raw_text(chunks);
        };
        let platform = first.platform();
        let mut table = Table::new(title_for(first.directory_path()), headers(platform));

        for listing in &listings {
            if listing.platform() != platform {
                warn!(
                    expected = platform.as_str(),
                    found = listing.platform().as_str(),
                    "listing chunks disagree on platform; keeping the first chunk's columns"
                );
            }
            match listing {
                Listing::Windows(listing) => {
                    for entry in &listing.files {
                        table.push_row(windows_row(&listing.host, entry, viewer));
                    }
                }
                Listing::Linux(listing) => {
                    for entry in &listing.files {
                        table.push_row(linux_row(&listing.host, entry, viewer));
                    }
                }
            }
        }

        if table.is_empty() {
            return gate::raw_text(chunks);
        }
        trace!(rows = table.rows.len(), platform = platform.as_str(), "rendered listing");
        ViewModel::Table(table)
    }
}

pub fn headers(platform: Platform) -> Vec<Header> {
    match platform {
        Platform::Windows => vec![
            actions_header(),
            Header::string("name").fill_width(),
            Header::size("size").with_width(150),
            Header::string("owner").fill_width(),
            Header::string("creation date").with_width(250),
            Header::string("last modified").fill_width(),
            Header::string("last accessed").with_width(250),
            metadata_header(),
        ],
        Platform::Linux => vec![
            actions_header(),
            Header::string("name").fill_width(),
            Header::size("size").with_width(150),
            Header::string("user").with_width(125),
            Header::string("group").with_width(125),
            Header::string("permissions").with_width(150),
            Header::string("last modified").fill_width(),
            metadata_header(),
        ],
    }
}

/// Cat, Download, Delete and List, each with its own copy of the target
fn file_actions(platform: Platform, host: &str, info: &FileInfo) -> Vec<ActionDescriptor> {
    let path = action_path(platform, host, &info.full_name);
    vec![
        ActionDescriptor::task("Cat", "cat", TaskParameters::path(host, path.clone()))
            .disabled_when(!info.is_file),
        ActionDescriptor::task(
            "Download",
            "file_browser:download",
            TaskParameters::file(host, path.clone()),
        )
        .with_icon("download")
        .disabled_when(!info.is_file),
        ActionDescriptor::task(
            "Delete",
            "file_browser:remove",
            TaskParameters::path(host, path.clone()),
        )
        .with_icon("delete"),
        ActionDescriptor::task("List", "file_browser:list", TaskParameters::path(host, path))
            .with_icon("list")
            .disabled_when(info.is_file),
    ]
}

fn windows_row(host: &str, entry: &WindowsEntry, viewer: &ViewerContext) -> Row {
    let info = &entry.info;

    let mut acl = SubTable::new(vec![
        Header::string("account").with_width(400),
        Header::string("rights").fill_width(),
        Header::string("type").with_width(400),
    ]);
    for ace in entry.permissions.entries() {
        acl.push_row(
            Row::new()
                .with("account", Cell::copyable(ace.account.as_str()))
                .with("rights", Cell::text(ace.rights.as_str()))
                .with("type", Cell::text(ace.kind.as_str())),
        );
    }

    Row::new()
        .with("actions", Cell::menu(file_actions(Platform::Windows, host, info)))
        .with("name", name_cell(info))
        .with("size", size_cell(info))
        .with("owner", Cell::text(entry.owner.as_str()))
        .with(
            "creation date",
            Cell::text(viewer.format_short(entry.creation_date(), TimestampUnit::Seconds)),
        )
        .with(
            "last modified",
            Cell::text(viewer.format_short(info.modify_time, TimestampUnit::Milliseconds)),
        )
        .with(
            "last accessed",
            Cell::text(viewer.format_short(info.access_time, TimestampUnit::Milliseconds)),
        )
        .with(
            "metadata",
            Cell::sub_table(metadata_title(info), metadata_hover_text(info), acl),
        )
}

fn linux_row(host: &str, entry: &LinuxEntry, viewer: &ViewerContext) -> Row {
    let info = &entry.info;
    let perms = &entry.permissions;

    let mut details = IndexMap::new();
    details.insert(
        "Created on".to_string(),
        viewer.format_long(perms.creation_date, TimestampUnit::Seconds),
    );
    details.insert(
        "Last accessed".to_string(),
        viewer.format_long(info.access_time, TimestampUnit::Milliseconds),
    );
    details.insert(
        "Last modified".to_string(),
        viewer.format_long(info.modify_time, TimestampUnit::Milliseconds),
    );
    details.insert(
        "User ownership".to_string(),
        format!("{}({})", perms.user, perms.uid),
    );
    details.insert(
        "Group ownership".to_string(),
        format!("{}({})", perms.group, perms.gid),
    );
    details.insert("Permissions".to_string(), perms.permissions.clone());
    if info.is_file {
        details.insert(
            "File is readable".to_string(),
            perms.owner_can_read().to_string(),
        );
        details.insert(
            "File is writable".to_string(),
            perms.owner_can_write().to_string(),
        );
    } else {
        let listable = perms.owner_can_read() && perms.owner_can_execute();
        details.insert("Directory is listable".to_string(), listable.to_string());
    }

    Row::new()
        .with("actions", Cell::menu(file_actions(Platform::Linux, host, info)))
        .with("name", name_cell(info))
        .with("size", size_cell(info))
        .with("user", Cell::text(perms.user.as_str()))
        .with("group", Cell::text(perms.group.as_str()))
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
