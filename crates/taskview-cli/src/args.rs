use crate::logging::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskview")]
#[command(about = "Render agent task responses as console views", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Viewer config file (defaults to $TASKVIEW_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render a task's responses as a view model")]
    Render {
        /// Request document `{command, task, responses}`; stdin when omitted
        file: Option<PathBuf>,

        /// Task command, overriding the one in the request
        #[arg(long)]
        command: Option<String>,

        #[arg(long)]
        pretty: bool,
    },

    #[command(name = "commands", about = "List the task commands that have a view")]
    Kinds,
}
