use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    Task,
}

/// Follow-on task the operator can submit from a table row.
///
/// `parameters` is JSON-encoded to a string when serialized, which is the
/// form the console submits to the target command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ActionKind,

    #[serde(rename = "ui_feature")]
    pub ui_feature: String,

    #[serde(serialize_with = "encode_parameters")]
    pub parameters: TaskParameters,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_icon: Option<String>,

    pub disabled: bool,
}

impl ActionDescriptor {
    pub fn task(
        name: impl Into<String>,
        ui_feature: impl Into<String>,
        parameters: TaskParameters,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ActionKind::Task,
            ui_feature: ui_feature.into(),
            parameters,
            start_icon: None,
            disabled: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn disabled_when(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn encoded_parameters(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.parameters)?)
    }
}

fn encode_parameters<S>(parameters: &TaskParameters, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let encoded = serde_json::to_string(parameters).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&encoded)
}

/// Parameters of a follow-on task, one shape per target command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskParameters {
    /// `cat`, `file_browser:remove`, `file_browser:list`
    Path(PathParameters),
    /// `file_browser:download`
    File(FileParameters),
    Ssh(SshParameters),
    Unsetenv(UnsetenvParameters),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParameters {
    pub host: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileParameters {
    pub host: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsetenvParameters {
    pub variable: String,
}

impl TaskParameters {
    pub fn path(host: &str, path: impl Into<String>) -> Self {
        TaskParameters::Path(PathParameters {
            host: host.to_string(),
            path: path.into(),
        })
    }

    pub fn file(host: &str, file: impl Into<String>) -> Self {
        TaskParameters::File(FileParameters {
            host: host.to_string(),
            file: file.into(),
        })
    }

    pub fn ssh(session: &SshSession, operation: SshOperation) -> Self {
        TaskParameters::Ssh(SshParameters {
            session: session.clone(),
            operation,
        })
    }

    pub fn unsetenv(variable: impl Into<String>) -> Self {
        TaskParameters::Unsetenv(UnsetenvParameters {
            variable: variable.into(),
        })
    }
}

fn default_ssh_port() -> u32 {
    22
}

/// Connection context shared by every `ssh` task issued from one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshSession {
    /// Credential record as issued; passed through untouched
    #[serde(default)]
    pub credentials: Value,

    #[serde(default)]
    pub agent: bool,

    pub host: String,

    #[serde(default = "default_ssh_port")]
    pub port: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SshOperation {
    Cat(String),
    Rm(String),
    Download(String),
    List(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SshParameters {
    #[serde(flatten)]
    pub session: SshSession,

    #[serde(flatten)]
    pub operation: SshOperation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameters_are_string_encoded() -> crate::Result<()> {
        let action = ActionDescriptor::task(
            "Download",
            "file_browser:download",
            TaskParameters::file("h1", "/tmp/a.txt"),
        )
        .with_icon("download");

        let json = serde_json::to_value(&action)?;
        assert_eq!(
            json,
            json!({
                "name": "Download",
                "type": "task",
                "ui_feature": "file_browser:download",
                "parameters": "{\"host\":\"h1\",\"file\":\"/tmp/a.txt\"}",
                "startIcon": "download",
                "disabled": false
            })
        );
        Ok(())
    }

    #[test]
    fn test_ssh_parameters_merge_session_and_operation() -> crate::Result<()> {
        let session = SshSession {
            credentials: json!({"account": "root", "credential": "toor"}),
            agent: false,
            host: "10.0.0.5".to_string(),
            port: 22,
        };
        let parameters = TaskParameters::ssh(&session, SshOperation::Cat("/etc/passwd".into()));

        let encoded: Value = serde_json::from_str(&serde_json::to_string(&parameters)?)?;
        assert_eq!(
            encoded,
            json!({
                "credentials": {"account": "root", "credential": "toor"},
                "agent": false,
                "host": "10.0.0.5",
                "port": 22,
                "cat": "/etc/passwd"
            })
        );
        Ok(())
    }

    #[test]
    fn test_ssh_session_port_defaults() -> crate::Result<()> {
        let session: SshSession = serde_json::from_str(r#"{"host": "box"}"#)?;
        assert_eq!(session.port, 22);
        assert!(!session.agent);
        assert!(session.credentials.is_null());
        Ok(())
    }
}
