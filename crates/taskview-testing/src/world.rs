//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory holding its config file and request
//! documents, so tests never read the developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `taskview` binary.
///
/// # Example
/// ```no_run
/// use assert_cmd::Command;
/// use taskview_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("[viewer]\nlocale = \"de_DE\"\n");
/// let request = world.write_request("req.json", "getenv", &["[]"]).unwrap();
///
/// let mut cmd = Command::new("taskview");
/// world.configure_command(&mut cmd).arg("render").arg(request);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Directory holding this world's config and request documents
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the config file the CLI will pick up through `TASKVIEW_CONFIG`
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Extra environment for the command, applied after the defaults
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Request document for a completed task
    pub fn request(command: &str, responses: &[&str]) -> Value {
        json!({
            "command": command,
            "task": {"status": "completed", "completed": true, "display_params": ""},
            "responses": responses,
        })
    }

    /// Write a request for a completed task and return its path
    pub fn write_request(&self, name: &str, command: &str, responses: &[&str]) -> Result<PathBuf> {
        self.write_json(name, &Self::request(command, responses))
    }

    pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }

    /// Point the command at this world's config and environment.
    ///
    /// The config path is always set, so a world without `with_config`
    /// runs with defaults instead of the user's file.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("TASKVIEW_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_document() -> Result<()> {
        let world = TestWorld::new();
        let path = world.write_request("r.json", "netstat", &["[]"])?;
        let value: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        assert_eq!(value["command"], "netstat");
        assert_eq!(value["responses"][0], "[]");
        assert_eq!(value["task"]["completed"], true);
        Ok(())
    }
}
