use thiserror::Error;

/// One syndicated news item, in feed order. Immutable once parsed; the list
/// is rebuilt from scratch on every fetch (no persistence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// Raw timestamp text as the source published it. Formatting happens at
    /// display time so an unparseable date can still be shown verbatim.
    pub published: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    /// Body was neither valid RSS nor valid Atom.
    #[error("Not a recognized feed format: {0}")]
    Unrecognized(String),
}

/// Entries extracted from a feed body, plus how many items were dropped for
/// lacking a link (a card without a link is unusable).
#[derive(Debug)]
pub struct ParseOutcome {
    pub entries: Vec<FeedEntry>,
    pub skipped: usize,
}

/// Parse a feed body into entries, preserving source order.
///
/// RSS 2.0 goes through the `rss` crate, which keeps the raw `pubDate`
/// string — the date formatter contract depends on seeing the source text.
/// Atom input falls back to `feed-rs`, whose parsed timestamps are
/// re-rendered to RFC 2822 so downstream formatting is uniform.
pub fn parse_entries(bytes: &[u8]) -> Result<ParseOutcome, ParseError> {
    match rss::Channel::read_from(bytes) {
        Ok(channel) => Ok(from_rss(channel)),
        Err(rss_err) => {
            tracing::debug!(error = %rss_err, "Not RSS, trying Atom");
            from_atom(bytes)
        }
    }
}

fn from_rss(channel: rss::Channel) -> ParseOutcome {
    let mut skipped = 0;
    let mut entries = Vec::with_capacity(channel.items().len());
    for item in channel.items() {
        let Some(link) = item.link() else {
            skipped += 1;
            continue;
        };
        entries.push(FeedEntry {
            title: item.title().unwrap_or("Untitled").to_string(),
            link: link.to_string(),
            published: item.pub_date().map(str::to_string),
            description: item.description().map(str::to_string),
        });
    }

    ParseOutcome { entries, skipped }
}

fn from_atom(bytes: &[u8]) -> Result<ParseOutcome, ParseError> {
    let feed =
        feed_rs::parser::parse(bytes).map_err(|e| ParseError::Unrecognized(e.to_string()))?;

    let mut skipped = 0;
    let entries = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let Some(link) = entry.links.into_iter().next().map(|l| l.href) else {
                skipped += 1;
                return None;
            };
            let published = entry
                .published
                .or(entry.updated)
                .map(|dt| dt.to_rfc2822());
            Some(FeedEntry {
                title: entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string()),
                link,
                published,
                description: entry.summary.map(|s| s.content),
            })
        })
        .collect();

    Ok(ParseOutcome { entries, skipped })
}
