//! Directory listing payloads produced by the `ls` command.
//!
//! The agent tags each listing with the platform it ran on; the permission
//! record of every entry has a different shape per platform, so the tag is
//! resolved into a sum type at decode time.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    pub fn separator(&self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Linux => '/',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "platform")]
pub enum Listing {
    Windows(WindowsListing),
    Linux(LinuxListing),
}

impl Listing {
    pub fn platform(&self) -> Platform {
        match self {
            Listing::Windows(_) => Platform::Windows,
            Listing::Linux(_) => Platform::Linux,
        }
    }

    /// Full path of the listed directory, when the agent reported it
    pub fn directory_path(&self) -> Option<String> {
        let (parent, name) = match self {
            Listing::Windows(listing) => (&listing.parent_path, &listing.name),
            Listing::Linux(listing) => (&listing.parent_path, &listing.name),
        };
        join_path(parent, name, self.platform().separator())
    }
}

/// Join a parent path and an entry name with the platform separator
pub fn join_path(parent: &str, name: &str, separator: char) -> Option<String> {
    match (parent.is_empty(), name.is_empty()) {
        (true, true) => None,
        (true, false) => Some(name.to_string()),
        (false, true) => Some(parent.to_string()),
        (false, false) if parent.ends_with(separator) => Some(format!("{parent}{name}")),
        (false, false) => Some(format!("{parent}{separator}{name}")),
    }
}

/// Fields every listing entry carries regardless of platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileInfo {
    pub name: String,

    pub full_name: String,

    pub is_file: bool,

    #[serde(default)]
    pub size: u64,

    /// Epoch milliseconds
    #[serde(default)]
    pub access_time: Option<i64>,

    /// Epoch milliseconds
    #[serde(default)]
    pub modify_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowsListing {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub parent_path: String,

    #[serde(default)]
    pub files: Vec<WindowsEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowsEntry {
    #[serde(flatten)]
    pub info: FileInfo,

    #[serde(default)]
    pub owner: String,

    /// Epoch seconds
    #[serde(default)]
    pub creation_date: Option<i64>,

    #[serde(default)]
    pub permissions: WindowsPermissions,
}

impl WindowsEntry {
    pub fn creation_date(&self) -> Option<i64> {
        self.creation_date.or(match &self.permissions {
            WindowsPermissions::Wrapped { creation_date, .. } => *creation_date,
            WindowsPermissions::Bare(_) => None,
        })
    }
}

/// Older agents send the ACL list directly, newer ones wrap it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WindowsPermissions {
    Wrapped {
        #[serde(default)]
        acls: Vec<AccessControlEntry>,

        #[serde(default)]
        creation_date: Option<i64>,
    },
    Bare(Vec<AccessControlEntry>),
}

impl Default for WindowsPermissions {
    fn default() -> Self {
        WindowsPermissions::Bare(Vec::new())
    }
}

impl WindowsPermissions {
    pub fn entries(&self) -> &[AccessControlEntry] {
        match self {
            WindowsPermissions::Wrapped { acls, .. } => acls,
            WindowsPermissions::Bare(acls) => acls,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessControlEntry {
    #[serde(default)]
    pub account: String,

    #[serde(default)]
    pub rights: String,

    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinuxListing {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub parent_path: String,

    #[serde(default)]
    pub files: Vec<LinuxEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinuxEntry {
    #[serde(flatten)]
    pub info: FileInfo,

    pub permissions: LinuxPermissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinuxPermissions {
    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub group: String,

    pub uid: i64,

    pub gid: i64,

    /// Symbolic mode as printed by `ls -l`, e.g. `drwxr-xr-x`
    #[serde(default)]
    pub permissions: String,

    /// Epoch seconds
    #[serde(default)]
    pub creation_date: Option<i64>,
}

impl LinuxPermissions {
    fn mode_char(&self, index: usize) -> Option<char> {
        self.permissions.chars().nth(index)
    }

    pub fn owner_can_read(&self) -> bool {
        self.mode_char(1) == Some('r')
    }

    pub fn owner_can_write(&self) -> bool {
        self.mode_char(2) == Some('w')
    }

    pub fn owner_can_execute(&self) -> bool {
        self.mode_char(3) == Some('x')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_linux_listing() -> serde_json::Result<()> {
        let listing: Listing = serde_json::from_str(
            r#"{"platform":"Linux","host":"h1","files":[{"name":"a.txt","is_file":true,"size":10,
            "full_name":"/tmp/a.txt","permissions":{"user":"bob","group":"bob","uid":1000,
            "gid":1000,"permissions":"-rw-r--r--"},"modify_time":1700000000,"access_time":1700000000}]}"#,
        )?;

        let Listing::Linux(linux) = listing else {
            panic!("expected a Linux listing");
        };
        assert_eq!(linux.host, "h1");
        let entry = &linux.files[0];
        assert_eq!(entry.info.name, "a.txt");
        assert_eq!(entry.info.size, 10);
        assert_eq!(entry.info.modify_time, Some(1_700_000_000));
        assert!(entry.permissions.owner_can_read());
        assert!(entry.permissions.owner_can_write());
        assert!(!entry.permissions.owner_can_execute());
        Ok(())
    }

    #[test]
    fn test_decode_windows_acl_shapes() -> serde_json::Result<()> {
        let listing: Listing = serde_json::from_str(
            r#"{"platform":"Windows","host":"WS01","files":[
                {"name":"a.txt","full_name":"C:\\a.txt","is_file":true,"owner":"BUILTIN\\Administrators",
                 "permissions":{"acls":[{"account":"SYSTEM","rights":"FullControl","type":"Allow"}],"creation_date":1700000000}},
                {"name":"share","full_name":"share","is_file":false,
                 "permissions":[{"account":"Everyone","rights":"Read","type":"Allow"}]}
            ]}"#,
        )?;

        let Listing::Windows(windows) = listing else {
            panic!("expected a Windows listing");
        };
        assert_eq!(windows.files[0].permissions.entries()[0].account, "SYSTEM");
        assert_eq!(windows.files[0].creation_date(), Some(1_700_000_000));
        assert_eq!(windows.files[1].permissions.entries()[0].kind, "Allow");
        assert_eq!(windows.files[1].creation_date(), None);
        Ok(())
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let result: serde_json::Result<Listing> =
            serde_json::from_str(r#"{"platform":"Solaris","files":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_mode_string_has_no_flags() {
        let perms = LinuxPermissions {
            user: String::new(),
            group: String::new(),
            uid: 0,
            gid: 0,
            permissions: "-r".to_string(),
            creation_date: None,
        };
        assert!(perms.owner_can_read());
        assert!(!perms.owner_can_write());
        assert!(!perms.owner_can_execute());
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("C:\\", "Users", '\\').as_deref(), Some("C:\\Users"));
        assert_eq!(join_path("/home", "bob", '/').as_deref(), Some("/home/bob"));
        assert_eq!(join_path("", "", '/'), None);
    }
}
