//! Sibling supernet merging.
//!
//! Repeatedly folds pairs of sibling blocks into their parent until no pair
//! remains. Expects subset-free input (see [`filter_subsets`](super::filter_subsets)).

use crate::models::{Block, BlockSet};

/// Result of [`merge_to_fixpoint_counted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Merged blocks.
    pub blocks: BlockSet,
    /// Number of passes run, including the final pass that changed nothing.
    pub passes: usize,
}

/// Merge sibling blocks until a fixpoint is reached.
///
/// # Examples
/// ```
/// use cloud_iplist_aggregate::models::BlockSet;
/// use cloud_iplist_aggregate::processing::merge_to_fixpoint;
/// let input: BlockSet = ["10.0.0.0/25", "10.0.0.128/25", "10.0.1.0/24"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(merge_to_fixpoint(&input).to_cidr_strings(), vec!["10.0.0.0/23"]);
/// ```
pub fn merge_to_fixpoint(input: &BlockSet) -> BlockSet {
    merge_to_fixpoint_counted(input).blocks
}

/// Same as [`merge_to_fixpoint`], also reporting how many passes it took.
pub fn merge_to_fixpoint_counted(input: &BlockSet) -> MergeOutcome {
    let mut current = input.to_vec();
    let mut passes = 0;

    loop {
        passes += 1;
        let next = merge_pass(&current);
        let shrunk = next.len() < current.len();
        current = next;
        if !shrunk {
            break;
        }
    }

    MergeOutcome {
        blocks: current.into_iter().collect(),
        passes,
    }
}

/// One left-to-right pass over blocks sorted by address.
///
/// Each lower/upper sibling pair is replaced by its parent and both are
/// consumed; every other block is kept as is. The output stays sorted.
pub fn merge_pass(sorted: &[Block]) -> Vec<Block> {
    let mut merged = Vec::with_capacity(sorted.len());
    let mut i = 0;

    while i < sorted.len() {
        let current = sorted[i];
        let parent = sorted
            .get(i + 1)
            .filter(|next| current.is_lower_sibling_of(next))
            .and_then(|_| current.parent());
        match parent {
            Some(parent) => {
                merged.push(parent);
                i += 2;
            }
            None => {
                merged.push(current);
                i += 1;
            }
        }
    }

    merged
}
