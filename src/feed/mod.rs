//! Vendor IP-range feed input.
//!
//! This module handles getting raw entries into the aggregation pipeline:
//! - [`source`] - reading a feed from a file or URL, with a daily cache
//! - [`parse`] - splitting a feed body into raw entries

mod parse;
mod source;

// Re-export public functions
pub use parse::parse_feed;
pub use source::{cache_file_path, fetch_feed, is_url, read_feed, read_feed_file};
