//! Error types for hostedit.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostsError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Could not read or write {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Reserved for stricter grammars; a line that fails the mapping
    /// grammar currently degrades to a comment instead.
    #[error("Malformed hosts document: {0}")]
    MalformedDocument(String),
}

impl HostsError {
    /// Map an I/O failure on `path` to the matching error kind.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => HostsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => HostsError::PermissionDenied(path.to_path_buf()),
            _ => HostsError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
