//! Formatting helpers for message rows and the header.

use chrono::{DateTime, Local};
use inboxrank_api::Urgency;

/// Colored marker shown next to an urgency label.
#[must_use]
pub const fn urgency_marker(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Red => "\u{1F534}",
        Urgency::Yellow => "\u{1F7E1}",
        Urgency::Green => "\u{1F7E2}",
    }
}

/// Formats an RFC 2822 date string to local time.
///
/// Converts dates like "Thu, 15 Jan 2026 19:31:43 +0000" to the local
/// timezone. Anything unparsable is returned verbatim.
#[must_use]
pub fn format_date_local(date: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc2822(date) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%a, %d %b %Y %H:%M:%S").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%a, %d %b %Y %H:%M:%S").to_string();
    }

    date.to_string()
}

/// Truncates a string to a maximum length with ellipsis.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Gets initials from a name for the avatar.
#[must_use]
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let first = |part: &str| {
        part.chars()
            .next()
            .map_or_else(String::new, |c| c.to_uppercase().collect())
    };
    match parts.as_slice() {
        [] => "?".to_string(),
        [only] => first(only),
        [head, .., last] => format!("{}{}", first(head), first(last)),
    }
}
