//! Entry normalization.
//!
//! Turns raw feed strings into canonical [`Block`]s, collecting anything that is
//! not an IPv4 address or CIDR as a [`RejectedEntry`].

use crate::models::{Block, BlockSet, RejectReason, RejectedEntry};
use std::net::Ipv6Addr;

/// Normalize raw entries into a [`BlockSet`].
///
/// Bare addresses become `/32` blocks and host bits are masked off CIDRs.
/// Duplicates collapse in the returned set. Rejections keep input order.
///
/// # Examples
/// ```
/// use cloud_iplist_aggregate::processing::normalize;
/// let (blocks, rejected) = normalize(&["192.168.1.5", "10.0.0.9/24", "::1"]);
/// assert_eq!(blocks.to_cidr_strings(), vec!["10.0.0.0/24", "192.168.1.5/32"]);
/// assert_eq!(rejected[0].reason.code(), "ipv6_unsupported");
/// ```
pub fn normalize<S: AsRef<str>>(raw: &[S]) -> (BlockSet, Vec<RejectedEntry>) {
    let mut blocks = BlockSet::new();
    let mut rejected = Vec::new();

    for entry in raw {
        let entry = entry.as_ref();
        match parse_entry(entry) {
            Ok(block) => {
                blocks.insert(block);
            }
            Err(reason) => rejected.push(RejectedEntry::new(entry, reason)),
        }
    }

    (blocks, rejected)
}

/// Parse a single entry as a bare IPv4 address or IPv4 CIDR.
pub fn parse_entry(entry: &str) -> Result<Block, RejectReason> {
    let entry = entry.trim();
    match entry.parse::<Block>() {
        Ok(block) => Ok(block),
        Err(_) if is_ipv6(entry) => Err(RejectReason::Ipv6Unsupported),
        Err(_) => Err(RejectReason::InvalidCidr),
    }
}

/// True for a valid IPv6 address or IPv6 CIDR (`addr/0..=128`).
fn is_ipv6(entry: &str) -> bool {
    match entry.split_once('/') {
        Some((addr, len)) => {
            addr.parse::<Ipv6Addr>().is_ok()
                && !len.is_empty()
                && len.bytes().all(|c| c.is_ascii_digit())
                && len.parse::<u8>().is_ok_and(|len| len <= 128)
        }
        None => entry.parse::<Ipv6Addr>().is_ok(),
    }
}
