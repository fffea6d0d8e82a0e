//! Error types for painloclib

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during line counting.
///
/// Both kinds are fatal: a count either covers every qualifying file or
/// does not produce a number at all.
#[derive(Error, Debug)]
pub enum PainlocError {
    /// The traversal root, or a directory below it, could not be walked
    #[error("cannot walk directory '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A qualifying file could not be opened or read to completion
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PainlocError {
    /// The path the error is about.
    pub fn path(&self) -> &Path {
        match self {
            PainlocError::Filesystem { path, .. } | PainlocError::FileRead { path, .. } => path,
        }
    }

    /// Check if this error came from reading a single file
    pub fn is_file_read(&self) -> bool {
        matches!(self, PainlocError::FileRead { .. })
    }
}
