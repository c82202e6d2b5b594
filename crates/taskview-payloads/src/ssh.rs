use crate::listing::{FileInfo, join_path};
use serde::Deserialize;
use taskview_types::SshSession;

/// Arguments an `ssh` task was issued with
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshArgs {
    #[serde(flatten)]
    pub session: SshSession,

    #[serde(default)]
    pub list: Option<String>,

    #[serde(default)]
    pub download: Option<String>,

    #[serde(default)]
    pub cat: Option<String>,

    #[serde(default)]
    pub rm: Option<String>,

    #[serde(default)]
    pub exec: Option<String>,

    #[serde(default)]
    pub upload: Option<String>,
}

/// What an `ssh` task does, as far as rendering its output is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshCommand {
    List,
    Download,
    Other,
}

impl SshArgs {
    pub fn command(&self) -> SshCommand {
        if self.list.is_some() {
            SshCommand::List
        } else if self.download.is_some() {
            SshCommand::Download
        } else {
            SshCommand::Other
        }
    }
}

/// Listing of a remote host reached over SSH (always POSIX, numeric owners only)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SshListing {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub parent_path: String,

    #[serde(default)]
    pub files: Vec<SshEntry>,
}

impl SshListing {
    pub fn directory_path(&self) -> Option<String> {
        join_path(&self.parent_path, &self.name, '/')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SshEntry {
    #[serde(flatten)]
    pub info: FileInfo,

    pub permissions: SshPermissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SshPermissions {
    pub uid: u32,

    pub gid: u32,

    #[serde(default)]
    pub permissions: String,
}
