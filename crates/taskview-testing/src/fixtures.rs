//! Agent responses and task states for tests.
//!
//! Chunks are produced the way agents emit them: one JSON document per
//! chunk, serialized to a string.

use serde_json::{Value, json};
use taskview_types::{TaskState, TaskStatus};

pub fn completed_task() -> TaskState {
    TaskState::new(TaskStatus::Completed).mark_completed()
}

pub fn pending_task() -> TaskState {
    TaskState::new(TaskStatus::Processing)
}

pub fn failed_task(detail: &str) -> TaskState {
    TaskState::new(format!("error: {detail}")).mark_completed()
}

pub fn chunks(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|c| c.to_string()).collect()
}

/// Builder for one `ls` response chunk.
///
/// # Example
/// ```
/// use taskview_testing::ListingFixture;
///
/// let chunk = ListingFixture::linux("web01")
///     .in_directory("/", "etc")
///     .file("passwd", 2048)
///     .directory("ssh")
///     .to_chunk();
/// assert!(chunk.contains("\"platform\":\"Linux\""));
/// ```
#[derive(Debug, Clone)]
pub struct ListingFixture {
    platform: &'static str,
    host: String,
    name: String,
    parent_path: String,
    files: Vec<Value>,
}

impl ListingFixture {
    pub fn linux(host: &str) -> Self {
        Self::new("Linux", host)
    }

    pub fn windows(host: &str) -> Self {
        Self::new("Windows", host)
    }

    fn new(platform: &'static str, host: &str) -> Self {
        Self {
            platform,
            host: host.to_string(),
            name: String::new(),
            parent_path: String::new(),
            files: Vec::new(),
        }
    }

    fn separator(&self) -> &'static str {
        if self.platform == "Windows" { "\\" } else { "/" }
    }

    pub fn in_directory(mut self, parent_path: &str, name: &str) -> Self {
        self.parent_path = parent_path.to_string();
        self.name = name.to_string();
        self
    }

    fn full_name(&self, name: &str) -> String {
        let sep = self.separator();
        let dir = match (self.parent_path.as_str(), self.name.as_str()) {
            ("", dir) => dir.to_string(),
            (parent, dir) if parent.ends_with(sep) => format!("{parent}{dir}"),
            (parent, dir) => format!("{parent}{sep}{dir}"),
        };
        if dir.ends_with(sep) || dir.is_empty() {
            format!("{dir}{name}")
        } else {
            format!("{dir}{sep}{name}")
        }
    }

    fn default_entry(&self, name: &str, is_file: bool, size: u64) -> Value {
        let mode = if is_file { "-rw-r--r--" } else { "drwxr-xr-x" };
        let permissions = if self.platform == "Windows" {
            json!({
                "acls": [
                    {"account": "NT AUTHORITY\\SYSTEM", "rights": "FullControl", "type": "Allow"},
                    {"account": "BUILTIN\\Users", "rights": "ReadAndExecute", "type": "Allow"}
                ]
            })
        } else {
            json!({
                "user": "root", "group": "root", "uid": 0, "gid": 0,
                "permissions": mode, "creation_date": 1_700_000_000
            })
        };

        let mut entry = json!({
            "name": name,
            "full_name": self.full_name(name),
            "is_file": is_file,
            "size": size,
            "access_time": 1_700_000_000_000i64,
            "modify_time": 1_700_000_000_000i64,
            "permissions": permissions,
        });
        if self.platform == "Windows" {
            entry["owner"] = json!("BUILTIN\\Administrators");
            entry["creation_date"] = json!(1_700_000_000);
        }
        entry
    }

    pub fn file(mut self, name: &str, size: u64) -> Self {
        let entry = self.default_entry(name, true, size);
        self.files.push(entry);
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        let entry = self.default_entry(name, false, 4096);
        self.files.push(entry);
        self
    }

    /// Append an entry verbatim, for shapes the helpers don't cover
    pub fn entry(mut self, entry: Value) -> Self {
        self.files.push(entry);
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "platform": self.platform,
            "host": self.host,
            "name": self.name,
            "parent_path": self.parent_path,
            "files": self.files,
        })
    }

    pub fn to_chunk(&self) -> String {
        self.to_value().to_string()
    }
}

/// Builder for one chunk of an `ssh` remote listing
#[derive(Debug, Clone)]
pub struct SshListingFixture {
    host: String,
    name: String,
    parent_path: String,
    files: Vec<Value>,
}

impl SshListingFixture {
    pub fn new(host: &str, parent_path: &str, name: &str) -> Self {
        Self {
            host: host.to_string(),
            name: name.to_string(),
            parent_path: parent_path.to_string(),
            files: Vec::new(),
        }
    }

    fn push(mut self, name: &str, is_file: bool, size: u64) -> Self {
        let dir = format!("{}/{}", self.parent_path.trim_end_matches('/'), self.name);
        let mode = if is_file { "-rw-------" } else { "drwx------" };
        self.files.push(json!({
            "name": name,
            "full_name": format!("{dir}/{name}"),
            "is_file": is_file,
            "size": size,
            "access_time": 1_700_000_000_000i64,
            "modify_time": 1_700_000_000_000i64,
            "permissions": {
                "uid": 1000,
                "gid": 1000,
                "permissions": mode
            }
        }));
        self
    }

    pub fn file(self, name: &str, size: u64) -> Self {
        self.push(name, true, size)
    }

    pub fn directory(self, name: &str) -> Self {
        self.push(name, false, 4096)
    }

    pub fn to_chunk(&self) -> String {
        json!({
            "host": self.host,
            "name": self.name,
            "parent_path": self.parent_path,
            "files": self.files,
        })
        .to_string()
    }
}

/// Task parameters of an `ssh` task that lists `path`
pub fn ssh_list_params(account: &str, host: &str, path: &str) -> String {
    json!({
        "credentials": {"account": account, "type": "plaintext", "credential": "hunter2"},
        "agent": false,
        "host": host,
        "port": 22,
        "list": path,
    })
    .to_string()
}

/// `getenv` chunk from key/value pairs
pub fn env_chunk(vars: &[(&str, &str)]) -> String {
    let vars: Vec<Value> = vars
        .iter()
        .map(|(key, value)| json!({"key": key, "value": value}))
        .collect();
    Value::Array(vars).to_string()
}

/// `netstat` chunk for one established TCP connection
pub fn tcp_connection(local: (&str, u16), remote: (&str, u16), pids: &[u32]) -> Value {
    json!({
        "proto": "tcp",
        "local_addr": local.0,
        "local_port": local.1,
        "remote_addr": remote.0,
        "remote_port": remote.1,
        "state": "ESTABLISHED",
        "associated_pids": pids,
    })
}

pub fn netstat_chunk(connections: Vec<Value>) -> String {
    Value::Array(connections).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_names() {
        let linux = ListingFixture::linux("h").in_directory("/", "etc");
        assert_eq!(linux.full_name("passwd"), "/etc/passwd");

        let windows = ListingFixture::windows("h").in_directory("C:\\", "Users");
        assert_eq!(windows.full_name("bob"), "C:\\Users\\bob");

        let bare = ListingFixture::linux("h");
        assert_eq!(bare.full_name("a.txt"), "a.txt");
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let value = ListingFixture::linux("h")
            .file("b.txt", 1)
            .directory("a")
            .to_value();
        assert_eq!(value["files"][0]["name"], "b.txt");
        assert_eq!(value["files"][1]["is_file"], false);
    }
}
