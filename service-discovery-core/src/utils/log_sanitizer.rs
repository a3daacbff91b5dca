//! Log sanitization utilities
//!
//! Keeps credentials embedded in probe URLs out of debug/error logs and
//! bounds the length of what gets logged.

use url::Url;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written in place of a password.
const REDACTED: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render a URL for logging with its password replaced by `***`.
///
/// The username is kept so that logs still show which account was probed.
pub fn redact_url(url: &Url) -> String {
    if url.password().is_none() {
        return truncate_for_log(url.as_str());
    }
    let mut redacted = url.clone();
    // Only fails for cannot-be-a-base URLs, which never carry a password.
    let _ = redacted.set_password(Some(REDACTED));
    truncate_for_log(redacted.as_str())
}
