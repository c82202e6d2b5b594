use serde::Deserialize;

/// One socket reported by `netstat`; a chunk is a JSON array of these
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConnection {
    pub proto: String,

    #[serde(default)]
    pub local_addr: Option<String>,

    #[serde(default)]
    pub local_port: Option<u16>,

    #[serde(default)]
    pub remote_addr: Option<String>,

    #[serde(default)]
    pub remote_port: Option<u16>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub associated_pids: Option<Vec<u32>>,
}

impl NetworkConnection {
    /// Associated process ids joined with `,`
    pub fn pid_list(&self) -> String {
        self.associated_pids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn has_pids(&self) -> bool {
        self.associated_pids
            .as_ref()
            .is_some_and(|pids| !pids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listening_socket_has_null_remote() -> serde_json::Result<()> {
        let conns: Vec<NetworkConnection> = serde_json::from_str(
            r#"[{"proto":"tcp","local_addr":"0.0.0.0","local_port":22,"remote_addr":null,
                 "remote_port":null,"state":"LISTEN","associated_pids":[812, 813]}]"#,
        )?;

        assert_eq!(conns[0].remote_addr, None);
        assert_eq!(conns[0].pid_list(), "812,813");
        assert!(conns[0].has_pids());
        Ok(())
    }

    #[test]
    fn test_missing_pids() -> serde_json::Result<()> {
        let conn: NetworkConnection = serde_json::from_str(r#"{"proto":"udp"}"#)?;
        assert_eq!(conn.pid_list(), "");
        assert!(!conn.has_pids());
        Ok(())
    }
}
