//! IP list aggregation logic.
//!
//! This module contains the aggregation stages, applied in order:
//! - [`range`] - expansion of hyphenated ranges into CIDRs (optional pre-pass)
//! - [`normalize`] - raw strings to canonical blocks, with rejections
//! - [`subset`] - removal of blocks contained in other blocks
//! - [`supernet`] - sibling merging to a fixpoint
//! - [`pipeline`] - the three core stages chained together

mod normalize;
mod pipeline;
mod range;
mod subset;
mod supernet;

// Re-export public functions
pub use normalize::{normalize, parse_entry};
pub use pipeline::{aggregate, Aggregation};
pub use range::{expand_ranges, parse_range, range_to_blocks};
pub use subset::filter_subsets;
pub use supernet::{merge_pass, merge_to_fixpoint, merge_to_fixpoint_counted, MergeOutcome};
