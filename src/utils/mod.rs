//! Utility functions for the TUI

use chrono::{DateTime, Local};

/// Format a stored RFC 3339 sign-in timestamp for display. Values
/// that fail to parse are shown as-is.
pub fn format_login_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format whole seconds as a mm:ss countdown.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s[..max_len].to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(300), "05:00");
        assert_eq!(format_mmss(3725), "62:05");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn unparseable_login_time_passes_through() {
        assert_eq!(format_login_time("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn rfc3339_login_time_is_reformatted() {
        let formatted = format_login_time("2026-08-29T12:34:56Z");
        assert!(formatted.contains("2026-08-29") || formatted.contains(":"));
        assert!(!formatted.contains('T'));
    }
}
