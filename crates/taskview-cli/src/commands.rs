use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    match cli.command {
        Commands::Render {
            file,
            command,
            pretty,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let viewer = config.viewer.to_context()?;
            handlers::render::handle(file.as_deref(), command.as_deref(), pretty, &viewer)
        }

        Commands::Kinds => handlers::commands::handle(),
    }
}
