//! Renderer-agnostic output contract.
//!
//! A [`ViewModel`] serializes to the shape the console's generic widget
//! consumes: `{"plaintext": ...}`, `{"table": [...]}` or `{"download": [...]}`.

mod action;
mod cell;
mod table;

pub use action::*;
pub use cell::*;
pub use table::*;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Exactly one renderable result per invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Plaintext(String),
    Table(Table),
    Download(DownloadDescriptor),
}

impl ViewModel {
    pub fn plaintext(text: impl Into<String>) -> Self {
        ViewModel::Plaintext(text.into())
    }

    pub fn as_plaintext(&self) -> Option<&str> {
        match self {
            ViewModel::Plaintext(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ViewModel::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_download(&self) -> Option<&DownloadDescriptor> {
        match self {
            ViewModel::Download(download) => Some(download),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ViewModel::Plaintext(_) => "plaintext",
            ViewModel::Table(_) => "table",
            ViewModel::Download(_) => "download",
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ViewModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ViewModel::Plaintext(text) => map.serialize_entry("plaintext", text)?,
            ViewModel::Table(table) => map.serialize_entry("table", std::slice::from_ref(table))?,
            ViewModel::Download(download) => {
                map.serialize_entry("download", std::slice::from_ref(download))?
            }
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadVariant {
    #[default]
    Contained,
}

/// Reference to a file the agent finished transferring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadDescriptor {
    /// Opaque handle the console resolves to the stored file
    pub agent_file_id: String,
    pub variant: DownloadVariant,
    pub name: String,
}

impl DownloadDescriptor {
    pub fn new(agent_file_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            agent_file_id: agent_file_id.into(),
            variant: DownloadVariant::Contained,
            name: name.into(),
        }
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_shape() {
        let view = ViewModel::plaintext("No response yet from agent...");
        insta::assert_json_snapshot!(view, @r#"
        {
          "plaintext": "No response yet from agent..."
        }
        "#);
    }

    #[test]
    fn test_download_shape() {
        let view = ViewModel::Download(DownloadDescriptor::new("a1b2", "Download /etc/hosts"));
        insta::assert_json_snapshot!(view, @r#"
        {
          "download": [
            {
              "agent_file_id": "a1b2",
              "variant": "contained",
              "name": "Download /etc/hosts"
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_table_is_wrapped_in_list() -> crate::Result<()> {
        let table = Table::new("Network Connections", vec![Header::string("state")]);
        let json: serde_json::Value = serde_json::from_str(&ViewModel::Table(table).to_json()?)?;

        assert_eq!(json["table"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["table"][0]["title"], "Network Connections");
        assert_eq!(json["table"][0]["headers"][0]["plaintext"], "state");
        Ok(())
    }
}
