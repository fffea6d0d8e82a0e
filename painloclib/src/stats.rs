//! Core data structures for line counts

use std::path::PathBuf;

/// Line count of a single qualifying file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    /// Path to the file, as discovered under the traversal root
    pub path: PathBuf,
    /// Lines counted under the active policy
    pub lines: u64,
}

impl FileCount {
    /// Create a new file count.
    pub fn new(path: PathBuf, lines: u64) -> Self {
        Self { path, lines }
    }
}

/// Result of counting lines under a directory.
///
/// `total` is always the sum of `files[*].lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountResult {
    /// Lines counted across all qualifying files
    pub total: u64,
    /// Per-file counts, in discovery order
    pub files: Vec<FileCount>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's count to the result.
    pub fn add_file(&mut self, file: FileCount) {
        self.total += file.lines;
        self.files.push(file);
    }

    /// Number of qualifying files that were counted
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl FromIterator<FileCount> for CountResult {
    fn from_iter<I: IntoIterator<Item = FileCount>>(iter: I) -> Self {
        let mut result = CountResult::new();
        for file in iter {
            result.add_file(file);
        }
        result
    }
}
