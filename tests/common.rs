//! Shared test helpers.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for hosts file fixtures.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostedit_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Write a hosts file fixture and return its path.
pub fn write_hosts(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Run a closure with HOSTEDIT_FILE set to the given path.
pub fn with_hostedit_file<F, R>(path: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os("HOSTEDIT_FILE");
    std::env::set_var("HOSTEDIT_FILE", path);
    let r = f();
    match prev {
        Some(v) => std::env::set_var("HOSTEDIT_FILE", v),
        None => std::env::remove_var("HOSTEDIT_FILE"),
    }
    r
}
