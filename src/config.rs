//! Hosts file path resolution.
//!
//! Supports HOSTEDIT_FILE env var override for testing.

use std::path::{Path, PathBuf};

/// Platform default hosts file location.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return PathBuf::from("/etc/hosts");

    #[cfg(windows)]
    return PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts");
}

/// Resolve the hosts file to operate on: explicit flag, then
/// HOSTEDIT_FILE, then the platform default.
pub fn hosts_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Ok(p) = std::env::var("HOSTEDIT_FILE") {
        return PathBuf::from(p);
    }
    default_hosts_path()
}
