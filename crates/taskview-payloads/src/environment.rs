use serde::Deserialize;

/// One variable reported by `getenv`; a chunk is a JSON array of these
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentVariable {
    pub key: String,

    #[serde(default)]
    pub value: String,
}
