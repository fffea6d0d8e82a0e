//! The user-visible report line.

/// Build the report sentence for a line count.
///
/// # Example
///
/// ```rust
/// use painloclib::report;
///
/// assert_eq!(
///     report(42),
///     "You have painfully written 42 lines of code. You need to stop and get some help"
/// );
/// ```
pub fn report(count: u64) -> String {
    format!("You have painfully written {count} lines of code. You need to stop and get some help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_embeds_count() {
        assert_eq!(
            report(12),
            "You have painfully written 12 lines of code. You need to stop and get some help"
        );
    }

    #[test]
    fn test_report_zero_and_large_counts() {
        assert!(report(0).contains(" 0 lines of code"));
        assert!(report(1_234_567).contains(" 1234567 lines of code"));
        assert!(!report(u64::MAX).contains('\n'));
    }
}
