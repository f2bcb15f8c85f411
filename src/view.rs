//! Display records handed to the renderer.
//!
//! The renderer (TUI or `--once` stdout output) never touches feed types
//! directly: it receives [`NewsCard`]s for the visible prefix plus a
//! [`PageSummary`], and exposes back "refresh" and "load more" triggers.

use crate::feed::{format_published, FeedEntry};
use crate::pagination::Cursor;
use crate::util::sanitize_feed_text;

/// One rendered news item: title, link, pre-formatted date, optional
/// sanitized description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub link: String,
    /// "Month DD, YYYY", or the raw feed text when the date didn't parse.
    pub date: Option<String>,
    pub description: Option<String>,
}

/// "Showing X of Y" line, and whether a "load more" control makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub shown: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn has_more(&self) -> bool {
        self.shown < self.total
    }
}

/// Map the visible prefix of `entries` to display cards.
///
/// The cursor decides the prefix length; order is untouched.
pub fn page(entries: &[FeedEntry], cursor: Cursor) -> (Vec<NewsCard>, PageSummary) {
    let total = entries.len();
    let shown = cursor.visible_count(total);

    let cards = entries[..shown]
        .iter()
        .map(|entry| {
            let description = entry
                .description
                .as_deref()
                .map(sanitize_feed_text)
                .filter(|d| !d.is_empty());
            NewsCard {
                title: sanitize_feed_text(&entry.title),
                link: entry.link.clone(),
                date: entry
                    .published
                    .as_deref()
                    .map(|raw| format_published(raw).into_owned()),
                description,
            }
        })
        .collect();

    (cards, PageSummary { shown, total })
}
