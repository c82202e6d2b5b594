use crate::error::{Error, Result};
use crate::renderers::{
    DownloadRenderer, EnvironmentRenderer, ListingRenderer, NetstatRenderer, SshRenderer,
};
use crate::traits::ResponseRenderer;
use std::fmt;
use std::str::FromStr;

/// Task commands with a dedicated response view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Ls,
    Ssh,
    Getenv,
    Netstat,
    Download,
}

impl TaskKind {
    pub fn command(&self) -> &'static str {
        match self {
            TaskKind::Ls => "ls",
            TaskKind::Ssh => "ssh",
            TaskKind::Getenv => "getenv",
            TaskKind::Netstat => "netstat",
            TaskKind::Download => "download",
        }
    }

    pub fn all() -> [TaskKind; 5] {
        [
            TaskKind::Ls,
            TaskKind::Ssh,
            TaskKind::Getenv,
            TaskKind::Netstat,
            TaskKind::Download,
        ]
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for TaskKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TaskKind::all()
            .into_iter()
            .find(|kind| kind.command() == s)
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct RendererMetadata {
    pub kind: TaskKind,
    pub description: &'static str,
}

const RENDERERS: &[RendererMetadata] = &[
    RendererMetadata {
        kind: TaskKind::Ls,
        description: "Directory listing with file actions and metadata",
    },
    RendererMetadata {
        kind: TaskKind::Ssh,
        description: "Remote listing over SSH, or command output",
    },
    RendererMetadata {
        kind: TaskKind::Getenv,
        description: "Environment variables with unset actions",
    },
    RendererMetadata {
        kind: TaskKind::Netstat,
        description: "Network connections",
    },
    RendererMetadata {
        kind: TaskKind::Download,
        description: "File transfer progress, then the downloaded file",
    },
];

pub fn get_all_renderers() -> &'static [RendererMetadata] {
    RENDERERS
}

pub fn create_renderer(kind: TaskKind) -> Box<dyn ResponseRenderer> {
    match kind {
        TaskKind::Ls => Box::new(ListingRenderer),
        TaskKind::Ssh => Box::new(SshRenderer),
        TaskKind::Getenv => Box::new(EnvironmentRenderer),
        TaskKind::Netstat => Box::new(NetstatRenderer),
        TaskKind::Download => Box::new(DownloadRenderer),
    }
}

/// Look up a renderer by the command name the task was issued with
pub fn create_renderer_for(command: &str) -> Result<Box<dyn ResponseRenderer>> {
    command.parse().map(create_renderer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered() {
        for kind in TaskKind::all() {
            assert!(RENDERERS.iter().any(|m| m.kind == kind), "{kind} missing");
            assert_eq!(create_renderer(kind).kind(), kind);
        }
    }

    #[test]
    fn test_command_round_trip() {
        for kind in TaskKind::all() {
            assert_eq!(kind.command().parse::<TaskKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = create_renderer_for("shell").err();
        assert!(matches!(err, Some(Error::UnknownCommand(ref c)) if c == "shell"));
    }
}
