use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use taskview_engine::{ViewerContext, transform_command};
use taskview_types::TaskState;

/// Everything the console hands a renderer for one task
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub command: Option<String>,

    pub task: TaskState,

    #[serde(default)]
    pub responses: Vec<String>,
}

pub fn handle(
    file: Option<&Path>,
    command_override: Option<&str>,
    pretty: bool,
    viewer: &ViewerContext,
) -> Result<()> {
    let input = read_input(file)?;
    let request: RenderRequest =
        serde_json::from_str(&input).context("Render request is not valid JSON")?;

    let Some(command) = command_override.or(request.command.as_deref()) else {
        bail!("No task command given: set \"command\" in the request or pass --command");
    };

    tracing::debug!(
        command,
        status = %request.task.status,
        chunks = request.responses.len(),
        "rendering task"
    );

    let view = transform_command(command, &request.task, &request.responses, viewer)?;
    let output = if pretty {
        view.to_json_pretty()?
    } else {
        view.to_json()?
    };
    println!("{}", output);
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read request from stdin")?;
            Ok(input)
        }
    }
}
