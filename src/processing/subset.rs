//! Subset elimination.
//!
//! Drops every block that lies entirely inside another, distinct block.

use crate::models::{Block, BlockSet};

/// Return a new set with no block contained in a distinct other block.
///
/// Blocks are visited in ascending address order with the larger block first at
/// equal address. CIDR blocks either nest or are disjoint, so a block is inside
/// some distinct block exactly when it is inside the last block kept.
///
/// # Examples
/// ```
/// use cloud_iplist_aggregate::models::BlockSet;
/// use cloud_iplist_aggregate::processing::filter_subsets;
/// let input: BlockSet = ["10.0.0.0/24", "10.0.0.0/25"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(filter_subsets(&input).to_cidr_strings(), vec!["10.0.0.0/24"]);
/// ```
pub fn filter_subsets(input: &BlockSet) -> BlockSet {
    let mut kept: Vec<Block> = Vec::with_capacity(input.len());

    for block in input.iter() {
        match kept.last() {
            Some(last) if last.contains(block) => {}
            _ => kept.push(*block),
        }
    }

    kept.into_iter().collect()
}
