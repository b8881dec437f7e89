//! VFS Error Types

use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// File or directory not found
    #[error("path not found: {path}")]
    NotFound { path: String },

    /// Permission denied
    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    /// File content is not valid UTF-8
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    /// IO error
    #[error("IO error on '{path}': {message}")]
    Io { path: String, message: String },

    /// Internal lock was poisoned by a panicking writer
    #[error("file system lock poisoned")]
    Poisoned,
}

impl VfsError {
    /// Build a VFS error from an `std::io::Error` raised for `path`.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }
}
