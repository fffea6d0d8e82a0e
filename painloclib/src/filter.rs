//! File discovery: find the files whose lines are counted.
//!
//! Only two kinds of file qualify, C# sources and XAML markup, decided by a
//! case-sensitive suffix match on the file name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::PainlocError;
use crate::Result;

/// File name suffixes that make a file qualify for counting.
pub const QUALIFYING_SUFFIXES: [&str; 2] = [".cs", ".xaml"];

/// Check if a path names a qualifying file.
///
/// Only the final path component is looked at, so `View.xaml.cs` qualifies
/// and `Project.csproj` does not.
pub fn is_qualifying(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    QUALIFYING_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Discover qualifying files under a directory.
///
/// Every subdirectory is visited, hidden ones included. Symbolic links are
/// not followed into directories, but a link to anything else is returned
/// like a regular file. The result is sorted by path.
///
/// Fails with [`PainlocError::Filesystem`] when `root` is missing, is not a
/// directory, or cannot be listed. A directory below the root that cannot be
/// listed is logged and skipped.
pub fn discover_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let metadata = fs::metadata(root).map_err(|e| PainlocError::Filesystem {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(PainlocError::Filesystem {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let path = e.path().unwrap_or(root).to_path_buf();
                return Err(PainlocError::Filesystem {
                    path,
                    source: e.into(),
                });
            }
            // Unlistable directories below the root are skipped
            Err(e) => {
                let path = e.path().unwrap_or(root).display().to_string();
                warn!(path = %path, error = %e, "skipping unreadable directory");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        // Links to directories are listed but never descended
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }

        if is_qualifying(entry.path()) {
            files.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    files.sort();

    debug!(root = %root.display(), files = files.len(), "discovered qualifying files");

    Ok(files)
}
