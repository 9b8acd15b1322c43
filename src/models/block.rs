//! IPv4 CIDR block.
//!
//! Provides [`Block`], an IPv4 network stored as a masked `u32` plus a prefix
//! length, along with the mask arithmetic used by the aggregation stages.

use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask for a prefix length already known to be in `0..=32`.
fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Calculate the minimum prefix length an address can start, based on trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix and returns 0.
pub fn lo_mask(addr: u32) -> u8 {
    let trailing_zeros = addr.trailing_zeros().min(MAX_LENGTH as u32) as u8;
    MAX_LENGTH - trailing_zeros
}

/// IPv4 network block in canonical (masked) form.
///
/// Ordering is by address, then by prefix length, so at equal address the
/// larger block sorts first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Block {
    addr: u32,
    len: u8,
}

impl Block {
    /// Build a block from an address and prefix length, masking off host bits.
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Block, Box<dyn Error>> {
        if len > MAX_LENGTH {
            return Err(format!("Network length /{len} is too long").into());
        }
        Ok(Block::from_bits(u32::from(addr), len))
    }

    /// Single host block (`/32`).
    pub fn host(addr: Ipv4Addr) -> Block {
        Block::from_bits(u32::from(addr), MAX_LENGTH)
    }

    /// `len` must already be in `0..=32`.
    pub(crate) fn from_bits(addr: u32, len: u8) -> Block {
        debug_assert!(len <= MAX_LENGTH, "prefix length /{len} out of range");
        Block {
            addr: addr & prefix_mask(len),
            len,
        }
    }

    /// Network address.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }

    /// Prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Lowest address in the block.
    pub fn lo(&self) -> u32 {
        self.addr
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> u32 {
        self.addr | !prefix_mask(self.len)
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.len)
    }

    /// True if `other` lies entirely within this block (a block contains itself).
    pub fn contains(&self, other: &Block) -> bool {
        other.len >= self.len && other.addr & prefix_mask(self.len) == self.addr
    }

    /// The block one prefix length shorter that contains this one.
    ///
    /// `/0` has no parent.
    pub fn parent(&self) -> Option<Block> {
        if self.len == 0 {
            None
        } else {
            Some(Block::from_bits(self.addr, self.len - 1))
        }
    }

    /// True if `self` is the lower half and `next` the upper half of one parent.
    pub fn is_lower_sibling_of(&self, next: &Block) -> bool {
        self.len == next.len
            && self.len > 0
            && self.addr & prefix_mask(self.len - 1) == next.addr & prefix_mask(self.len - 1)
            && self.addr < next.addr
    }
}

impl FromStr for Block {
    type Err = Box<dyn Error>;

    /// Parse `a.b.c.d/n` or a bare `a.b.c.d` (taken as `/32`).
    fn from_str(s: &str) -> Result<Block, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((addr, len)) => {
                let addr: Ipv4Addr = addr
                    .parse()
                    .map_err(|_| format!("Invalid address {addr}"))?;
                if len.is_empty() || !len.bytes().all(|c| c.is_ascii_digit()) {
                    return Err(format!("Invalid prefix length {len}").into());
                }
                let len: u8 = len
                    .parse()
                    .map_err(|_| format!("Invalid prefix length {len}"))?;
                Block::new(addr, len)
            }
            None => {
                let addr: Ipv4Addr = s.parse().map_err(|_| format!("Invalid address {s}"))?;
                Ok(Block::host(addr))
            }
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &str) -> Block {
        s.parse().unwrap()
    }

    #[test]
    fn test_prefix_mask() {
        assert_eq!(prefix_mask(0), 0x00000000);
        assert_eq!(prefix_mask(1), 0x80000000);
        assert_eq!(prefix_mask(8), 0xFF000000);
        assert_eq!(prefix_mask(23), 0xFFFFFE00);
        assert_eq!(prefix_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_lo_mask() {
        assert_eq!(lo_mask(u32::from(Ipv4Addr::new(192, 168, 1, 1))), 32);
        assert_eq!(lo_mask(u32::from(Ipv4Addr::new(10, 11, 12, 0))), 22);
        assert_eq!(lo_mask(u32::from(Ipv4Addr::new(10, 6, 2, 80))), 28);
        assert_eq!(lo_mask(0), 0);
    }

    #[test]
    fn test_new_masks_host_bits() {
        let block = Block::new(Ipv4Addr::new(10, 0, 0, 5), 24).unwrap();
        assert_eq!(block.to_string(), "10.0.0.0/24");
        assert_eq!(b("192.168.1.42/16").to_string(), "192.168.0.0/16");
        assert_eq!(b("1.2.3.4/0").to_string(), "0.0.0.0/0");
        assert!(Block::new(Ipv4Addr::new(10, 0, 0, 0), 33).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(b("192.168.1.5").to_string(), "192.168.1.5/32");
        assert_eq!(b(" 10.0.0.0/8 ").to_string(), "10.0.0.0/8");
        assert!("300.1.1.1/24".parse::<Block>().is_err());
        assert!("10.0.0.0/".parse::<Block>().is_err());
        assert!("10.0.0.0/33".parse::<Block>().is_err());
        assert!("10.0.0.0/-1".parse::<Block>().is_err());
        assert!("10.0.0.0/+8".parse::<Block>().is_err());
        assert!("2001:db8::/32".parse::<Block>().is_err());
        assert!("".parse::<Block>().is_err());
    }

    #[test]
    fn test_lo_hi_size() {
        let block = b("10.0.0.0/8");
        assert_eq!(Ipv4Addr::from(block.lo()), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(Ipv4Addr::from(block.hi()), Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(block.size(), 16_777_216);
        assert_eq!(b("0.0.0.0/0").size(), 1u64 << 32);
        assert_eq!(b("0.0.0.0/0").hi(), u32::MAX);
        assert_eq!(b("1.1.1.1").size(), 1);
    }

    #[test]
    fn test_contains() {
        let big = b("10.0.0.0/8");
        assert!(big.contains(&b("10.1.2.0/24")));
        assert!(big.contains(&big));
        assert!(!b("10.1.2.0/24").contains(&big));
        assert!(!b("10.0.0.0/24").contains(&b("10.0.1.0/24")));
        assert!(b("0.0.0.0/0").contains(&b("255.255.255.255")));
    }

    #[test]
    fn test_parent() {
        assert_eq!(b("10.0.1.0/24").parent(), Some(b("10.0.0.0/23")));
        assert_eq!(b("10.0.0.1").parent(), Some(b("10.0.0.0/31")));
        assert_eq!(b("128.0.0.0/1").parent(), Some(b("0.0.0.0/0")));
        assert_eq!(b("0.0.0.0/0").parent(), None);
    }

    #[test]
    fn test_siblings() {
        assert!(b("10.0.0.0/24").is_lower_sibling_of(&b("10.0.1.0/24")));
        assert!(!b("10.0.1.0/24").is_lower_sibling_of(&b("10.0.0.0/24")));
        // adjacent but in different parents
        assert!(!b("10.0.1.0/24").is_lower_sibling_of(&b("10.0.2.0/24")));
        assert!(!b("10.0.0.0/24").is_lower_sibling_of(&b("10.0.1.0/25")));
        assert!(!b("0.0.0.0/0").is_lower_sibling_of(&b("0.0.0.0/0")));
        assert!(b("0.0.0.0/1").is_lower_sibling_of(&b("128.0.0.0/1")));
        assert!(b("10.0.0.0").is_lower_sibling_of(&b("10.0.0.1")));
    }

    #[test]
    fn test_ordering() {
        let mut blocks = vec![b("10.0.1.0/24"), b("10.0.0.0/25"), b("10.0.0.0/16")];
        blocks.sort();
        assert_eq!(
            blocks,
            vec![b("10.0.0.0/16"), b("10.0.0.0/25"), b("10.0.1.0/24")]
        );
    }
}
