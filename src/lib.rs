//! Aggregates a cloud vendor's published IPv4 ranges into a minimal set of
//! non-overlapping CIDR blocks for import as a PCE IP list.
//!
//! - [`models`] - blocks, block sets, and rejected entries
//! - [`processing`] - normalize, subset elimination, supernet merging
//! - [`feed`] - reading and splitting vendor feeds
//! - [`output`] - CSV files and terminal summary

pub mod cli;
pub mod config;
pub mod feed;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{Block, BlockSet, RejectReason, RejectedEntry};
pub use processing::{aggregate, Aggregation};

/// Aggregate a feed body already in memory: split it, then run [`aggregate`].
pub fn aggregate_feed(
    body: &str,
    expand_ranges: bool,
) -> Result<Aggregation, Box<dyn std::error::Error>> {
    let mut entries = feed::parse_feed(body)?;
    if expand_ranges {
        entries = processing::expand_ranges(&entries);
    }
    Ok(aggregate(&entries))
}
