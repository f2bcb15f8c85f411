use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clean a feed-controlled string for terminal display.
///
/// Google News descriptions arrive as HTML fragments, and any feed field can
/// smuggle control characters at the terminal. This strips tags, decodes the
/// entities the feed actually emits, replaces control characters with
/// spaces, and collapses runs of whitespace.
pub fn sanitize_feed_text(s: &str) -> String {
    let mut stripped = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            // A tag boundary acts as a word boundary ("</p><p>" etc.)
            '>' if in_tag => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if in_tag => {}
            c if c.is_control() => stripped.push(' '),
            c => stripped.push(c),
        }
    }

    // &amp; last, so double-encoded input stays single-encoded
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to `max_width` terminal columns, Unicode-aware.
///
/// CJK and emoji count as two columns. A truncated string ends in `…`
/// (one column). Returns `Cow::Borrowed` when the string already fits.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let target = max_width - 1; // room for the ellipsis
    let mut width = 0;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        end = i + c.len_utf8();
    }

    let mut out = String::with_capacity(end + '…'.len_utf8());
    out.push_str(&s[..end]);
    out.push('…');
    Cow::Owned(out)
}
