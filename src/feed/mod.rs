//! Feed retrieval and parsing.
//!
//! - [`fetcher`] - One-shot HTTP retrieval of the news search feed
//! - [`parser`] - RSS/Atom bodies into ordered [`FeedEntry`] lists
//! - [`dates`] - Feed timestamp text into human-readable dates

pub mod dates;
mod fetcher;
mod parser;

pub use dates::format_published;
pub use fetcher::{fetch, search_url, FetchError, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use parser::{parse_entries, FeedEntry, ParseError, ParseOutcome};
