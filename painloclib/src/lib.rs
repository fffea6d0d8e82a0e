//! # painloclib
//!
//! Counts lines of C# and XAML code under a directory tree.
//!
//! ## Overview
//!
//! Every file below the traversal root whose name ends with `.cs` or `.xaml`
//! is read and its lines are counted under a [`LinePolicy`]:
//!
//! - **Raw**: every physical line, blank and comment-only lines included
//! - **Filtered**: only lines that are non-blank after trimming and don't
//!   start with `//`
//!
//! Lines may end with `\n`, `\r\n` or `\r`; all three split the same way.
//! Any unreadable directory or file aborts the whole count.
//!
//! ## Example
//!
//! ```rust
//! use painloclib::{count_directory, report, CountOptions, LinePolicy};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("Program.cs"), "// entry\n\nclass Program {}\n").unwrap();
//! fs::write(dir.path().join("notes.txt"), "not counted\n").unwrap();
//!
//! let result = count_directory(dir.path(), CountOptions::new()).unwrap();
//! assert_eq!(result.total, 1);
//!
//! let raw = count_directory(dir.path(), CountOptions::new().policy(LinePolicy::Raw)).unwrap();
//! assert_eq!(raw.total, 3);
//!
//! println!("{}", report(result.total));
//! ```

pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod report;
pub mod stats;

pub use counter::{
    count_directory, count_file, count_files, count_lines, physical_lines, PhysicalLines,
};
pub use error::PainlocError;
pub use filter::{discover_files, is_qualifying, QUALIFYING_SUFFIXES};
pub use options::{CountOptions, LinePolicy};
pub use report::report;
pub use stats::{CountResult, FileCount};

/// Result type for painloclib operations
pub type Result<T> = std::result::Result<T, PainlocError>;
