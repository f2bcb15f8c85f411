//! Small shared utilities.

mod text;

pub use text::{sanitize_feed_text, truncate_to_width};
