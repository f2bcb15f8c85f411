use chrono::DateTime;
use std::borrow::Cow;

/// Reformat a feed timestamp into a human-readable "Month DD, YYYY" form.
///
/// Feed `pubDate` fields carry RFC 2822 text
/// (`"Mon, 02 Jan 2023 15:04:05 GMT"`). Anything that fails to parse is
/// returned unchanged — a bad date degrades to the raw text, it never
/// becomes an error the caller has to handle.
///
/// Returns `Cow::Borrowed` on the failure path, so malformed input costs no
/// allocation.
pub fn format_published(raw: &str) -> Cow<'_, str> {
    match DateTime::parse_from_rfc2822(raw.trim()) {
        Ok(dt) => Cow::Owned(dt.format("%B %d, %Y").to_string()),
        Err(_) => Cow::Borrowed(raw),
    }
}
