//! High-level line counting API.
//!
//! This module provides the entry points for counting lines: over in-memory
//! text, over a single file, and over a whole directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PainlocError;
use crate::filter::discover_files;
use crate::options::{CountOptions, LinePolicy};
use crate::stats::{CountResult, FileCount};
use crate::Result;

/// Iterator over the physical lines of a text, without their terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
/// does not start another line, so `"a\n"` has one line and `""` has none.
#[derive(Debug, Clone)]
pub struct PhysicalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &self.rest[..idx];
                let terminator = if self.rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[idx + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split text into physical lines.
///
/// A leading byte-order mark is kept as part of the first line. It is not
/// whitespace, so a first line of `\u{feff}// note` counts as code.
pub fn physical_lines(content: &str) -> PhysicalLines<'_> {
    PhysicalLines { rest: content }
}

/// Count the lines of a text that count under `policy`.
///
/// # Example
///
/// ```rust
/// use painloclib::{count_lines, LinePolicy};
///
/// let source = "// comment\n\nint x = 1;\n";
/// assert_eq!(count_lines(source, LinePolicy::Raw), 3);
/// assert_eq!(count_lines(source, LinePolicy::Filtered), 1);
/// ```
pub fn count_lines(content: &str, policy: LinePolicy) -> u64 {
    physical_lines(content)
        .filter(|line| policy.counts(line))
        .count() as u64
}

/// Count lines in a single file.
///
/// The file is read to completion as UTF-8 and closed before returning.
/// Any failure, decoding included, is a [`PainlocError::FileRead`] naming
/// the file.
pub fn count_file(path: impl AsRef<Path>, policy: LinePolicy) -> Result<u64> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PainlocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_lines(&content, policy))
}

/// Count lines in every qualifying file under a directory.
///
/// The first unreadable file aborts the whole count; there is no partial
/// result.
///
/// # Example
///
/// ```rust,ignore
/// use painloclib::{count_directory, CountOptions, LinePolicy};
///
/// let result = count_directory(".", CountOptions::new())?;
/// println!("{} lines in {} files", result.total, result.file_count());
///
/// let raw = count_directory(".", CountOptions::new().policy(LinePolicy::Raw))?;
/// ```
pub fn count_directory(root: impl AsRef<Path>, options: CountOptions) -> Result<CountResult> {
    let files = discover_files(root)?;
    count_files(files, options)
}

/// Count lines in a list of files, in the order given.
///
/// The total does not depend on that order. The first error aborts.
pub fn count_files<I>(files: I, options: CountOptions) -> Result<CountResult>
where
    I: IntoIterator<Item = PathBuf>,
{
    files
        .into_iter()
        .map(|path| -> Result<FileCount> {
            let lines = count_file(&path, options.policy)?;
            debug!(path = %path.display(), lines, policy = %options.policy, "counted file");
            Ok(FileCount::new(path, lines))
        })
        .collect()
}
