//! Hyphenated range expansion.
//!
//! Rewrites `a.b.c.d-e.f.g.h` entries into the CIDR blocks that exactly cover
//! the inclusive range, so they can be fed to [`normalize`](super::normalize).

use crate::models::{lo_mask, Block, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Replace every well-formed IPv4 range with its covering CIDR strings.
///
/// Entries that are not ranges, and ranges that are malformed or reversed,
/// are passed through unchanged.
pub fn expand_ranges<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(raw.len());

    for entry in raw {
        let entry = entry.as_ref();
        match parse_range(entry) {
            Some((start, end)) => expanded.extend(
                range_to_blocks(start, end)
                    .into_iter()
                    .map(|block| block.to_string()),
            ),
            None => expanded.push(entry.to_string()),
        }
    }

    expanded
}

/// Parse `start-end`, requiring `start <= end`.
pub fn parse_range(entry: &str) -> Option<(Ipv4Addr, Ipv4Addr)> {
    let (start, end) = entry.trim().split_once('-')?;
    let start: Ipv4Addr = start.trim().parse().ok()?;
    let end: Ipv4Addr = end.trim().parse().ok()?;
    (start <= end).then_some((start, end))
}

/// Minimal list of blocks covering `start..=end`, in ascending order.
///
/// At each step the biggest block that starts at the current address, is
/// aligned to it, and does not run past `end` is taken.
pub fn range_to_blocks(start: Ipv4Addr, end: Ipv4Addr) -> Vec<Block> {
    let mut blocks = Vec::new();
    let end = u32::from(end) as u64;
    let mut next_ip = u32::from(start) as u64;

    while next_ip <= end {
        let mut mask = lo_mask(next_ip as u32);
        while next_ip + (1u64 << (MAX_LENGTH - mask)) - 1 > end {
            mask += 1;
        }
        let block = Block::from_bits(next_ip as u32, mask);
        blocks.push(block);
        next_ip += block.size();
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidrs(blocks: Vec<Block>) -> Vec<String> {
        blocks.into_iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_aligned_range() {
        let blocks = range_to_blocks(Ipv4Addr::new(10, 0, 0, 0), Ipv4Addr::new(10, 0, 1, 255));
        assert_eq!(cidrs(blocks), vec!["10.0.0.0/23"]);
    }

    #[test]
    fn test_unaligned_range() {
        let blocks = range_to_blocks(Ipv4Addr::new(10, 0, 0, 5), Ipv4Addr::new(10, 0, 0, 20));
        assert_eq!(
            cidrs(blocks),
            vec!["10.0.0.5/32", "10.0.0.6/31", "10.0.0.8/29", "10.0.0.16/30", "10.0.0.20/32"]
        );
    }

    #[test]
    fn test_single_address() {
        let ip = Ipv4Addr::new(192, 168, 1, 1);
        assert_eq!(cidrs(range_to_blocks(ip, ip)), vec!["192.168.1.1/32"]);
    }

    #[test]
    fn test_full_space_and_top_edge() {
        let blocks = range_to_blocks(Ipv4Addr::new(0, 0, 0, 0), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(cidrs(blocks), vec!["0.0.0.0/0"]);

        let blocks = range_to_blocks(
            Ipv4Addr::new(255, 255, 255, 254),
            Ipv4Addr::new(255, 255, 255, 255),
        );
        assert_eq!(cidrs(blocks), vec!["255.255.255.254/31"]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_range("10.0.0.1 - 10.0.0.9"),
            Some((Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 9)))
        );
        assert_eq!(parse_range("10.0.0.9-10.0.0.1"), None);
        assert_eq!(parse_range("10.0.0.0/24"), None);
        assert_eq!(parse_range("10.0.0.1-nope"), None);
    }

    #[test]
    fn test_expand_ranges_passthrough() {
        let expanded = expand_ranges(&[
            "10.0.0.0/24",
            "10.0.1.0-10.0.1.255",
            "10.0.0.9-10.0.0.1",
            "2001:db8::/32",
        ]);
        assert_eq!(
            expanded,
            vec![
                "10.0.0.0/24",
                "10.0.1.0/24",
                "10.0.0.9-10.0.0.1",
                "2001:db8::/32"
            ]
        );
    }
}
