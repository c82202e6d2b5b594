//! Row pieces shared by the file listing renderers.

use crate::category;
use taskview_payloads::{FileInfo, Platform};
use taskview_types::{Cell, Header, TextCell};

/// Entry name, copyable, decorated with its category icon
pub fn name_cell(info: &FileInfo) -> Cell {
    let category = category::classify(&info.name, info.is_file);
    TextCell {
        plaintext: info.name.as_str().into(),
        copy_icon: true,
        icon: Some(category.start_icon()),
    }
    .into()
}

pub fn size_cell(info: &FileInfo) -> Cell {
    Cell::text(info.size)
}

pub fn metadata_hover_text(info: &FileInfo) -> &'static str {
    if info.is_file {
        "View file metadata"
    } else {
        "View directory metadata"
    }
}

pub fn metadata_title(info: &FileInfo) -> String {
    format!("Metadata for {}", info.name)
}

/// Path handed to follow-on tasks.
///
/// Windows names without a drive letter are taken relative to the listed
/// host and turned into a UNC path.
pub fn action_path(platform: Platform, host: &str, full_name: &str) -> String {
    match platform {
        Platform::Windows if full_name.contains(':') || full_name.starts_with("\\\\") => {
            full_name.to_string()
        }
        Platform::Windows => format!("\\\\{host}\\{full_name}"),
        Platform::Linux => full_name.to_string(),
    }
}

pub fn actions_header() -> Header {
    Header::button("actions").with_width(100).unsortable()
}

pub fn metadata_header() -> Header {
    Header::button("metadata").with_width(100).unsortable()
}

pub fn title_for(path: Option<String>) -> String {
    path.map(|p| format!("Contents of {p}")).unwrap_or_default()
}
