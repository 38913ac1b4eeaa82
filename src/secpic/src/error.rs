//! Error types shared by the codec and file operations.

use std::path::PathBuf;

use crate::backup::BackupError;

/// Errors that abort a decode or an edit
#[derive(Debug, thiserror::Error)]
pub enum PicError {
    #[error("File size too small: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: u64, actual: u64 },

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),
}
