//! Input options for line counting.
//!
//! This module contains the configuration types that control how lines
//! are counted.

use std::fmt;
use std::str::FromStr;

/// Rule deciding which physical lines of a file are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinePolicy {
    /// Every physical line counts, blank and comment-only lines included
    Raw,
    /// Only non-blank lines that don't start with `//` count
    #[default]
    Filtered,
}

impl LinePolicy {
    /// All policies, in declaration order
    pub const ALL: [LinePolicy; 2] = [LinePolicy::Raw, LinePolicy::Filtered];

    /// Lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LinePolicy::Raw => "raw",
            LinePolicy::Filtered => "filtered",
        }
    }

    /// Whether a single line (without its terminator) counts under this policy.
    pub fn counts(&self, line: &str) -> bool {
        match self {
            LinePolicy::Raw => true,
            LinePolicy::Filtered => {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with("//")
            }
        }
    }
}

impl fmt::Display for LinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(LinePolicy::Raw),
            "filtered" => Ok(LinePolicy::Filtered),
            _ => Err(format!(
                "Unknown line policy: {}. Use 'raw' or 'filtered'",
                s
            )),
        }
    }
}

/// Options for counting lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOptions {
    /// Which lines count
    pub policy: LinePolicy,
}

impl CountOptions {
    /// Create new default options (filtered policy).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line policy.
    pub fn policy(mut self, policy: LinePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_filtered() {
        assert_eq!(LinePolicy::default(), LinePolicy::Filtered);
        assert_eq!(CountOptions::new().policy, LinePolicy::Filtered);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("raw".parse::<LinePolicy>().unwrap(), LinePolicy::Raw);
        assert_eq!("RAW".parse::<LinePolicy>().unwrap(), LinePolicy::Raw);
        assert_eq!(
            "filtered".parse::<LinePolicy>().unwrap(),
            LinePolicy::Filtered
        );
        assert!("fast".parse::<LinePolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips_names() {
        for policy in LinePolicy::ALL {
            assert_eq!(policy.to_string().parse::<LinePolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_raw_counts_everything() {
        let raw = LinePolicy::Raw;
        assert!(raw.counts(""));
        assert!(raw.counts("   \t"));
        assert!(raw.counts("// comment"));
        assert!(raw.counts("int x = 1;"));
    }

    #[test]
    fn test_filtered_skips_blank_and_comment_lines() {
        let filtered = LinePolicy::Filtered;
        assert!(!filtered.counts(""));
        assert!(!filtered.counts("  \t  "));
        assert!(!filtered.counts("// comment"));
        assert!(!filtered.counts("    /// <summary>"));
        assert!(filtered.counts("int x = 1; // trailing comment"));
        assert!(filtered.counts("/* block */"));
        assert!(filtered.counts("<Grid>"));
    }

    #[test]
    fn test_options_builder() {
        let options = CountOptions::new().policy(LinePolicy::Raw);
        assert_eq!(options.policy, LinePolicy::Raw);
    }
}
