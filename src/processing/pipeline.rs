//! End-to-end aggregation: normalize, drop subsets, merge siblings.

use super::{filter_subsets, merge_to_fixpoint_counted, normalize};
use crate::models::{BlockSet, RejectedEntry};

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Final, non-overlapping, fully merged blocks.
    pub blocks: BlockSet,
    /// Entries that could not be normalized, in input order.
    pub rejected: Vec<RejectedEntry>,
    /// Unique blocks after normalization.
    pub normalized_count: usize,
    /// Blocks left after subset elimination.
    pub subset_free_count: usize,
    /// Merge passes until the fixpoint.
    pub passes: usize,
}

impl Aggregation {
    /// Final blocks as CIDR strings.
    pub fn cidrs(&self) -> Vec<String> {
        self.blocks.to_cidr_strings()
    }
}

/// Run the aggregation pipeline over raw feed entries.
pub fn aggregate<S: AsRef<str>>(raw: &[S]) -> Aggregation {
    log::info!("#Start aggregate() entries={}", raw.len());

    let (normalized, rejected) = normalize(raw);
    for entry in &rejected {
        log::warn!("Rejected entry {entry}");
    }
    log::info!(
        "Normalized {} entries into {} unique blocks, rejected {}",
        raw.len(),
        normalized.len(),
        rejected.len()
    );

    let subset_free = filter_subsets(&normalized);
    log::info!(
        "Removed {} blocks contained in other blocks => {}",
        normalized.len() - subset_free.len(),
        subset_free.len()
    );

    let merged = merge_to_fixpoint_counted(&subset_free);
    log::info!(
        "Merged siblings in {} pass(es) => {} blocks",
        merged.passes,
        merged.blocks.len()
    );
    log::debug!("Aggregated blocks: {}", merged.blocks);

    Aggregation {
        normalized_count: normalized.len(),
        subset_free_count: subset_free.len(),
        passes: merged.passes,
        blocks: merged.blocks,
        rejected,
    }
}
