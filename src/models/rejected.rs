//! Input entries that could not be turned into a [`Block`](super::Block).

use std::fmt;

/// Why an entry was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Not an IPv4 address or CIDR.
    InvalidCidr,
    /// A valid IPv6 address or CIDR.
    Ipv6Unsupported,
}

impl RejectReason {
    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::InvalidCidr => "invalid_cidr",
            RejectReason::Ipv6Unsupported => "ipv6_unsupported",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A raw input string paired with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// The original, untrimmed input.
    pub raw: String,
    pub reason: RejectReason,
}

impl RejectedEntry {
    pub fn new(raw: impl Into<String>, reason: RejectReason) -> RejectedEntry {
        RejectedEntry {
            raw: raw.into(),
            reason,
        }
    }
}

impl fmt::Display for RejectedEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' ({})", self.raw, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(RejectReason::InvalidCidr.code(), "invalid_cidr");
        assert_eq!(RejectReason::Ipv6Unsupported.code(), "ipv6_unsupported");
        assert_eq!(RejectReason::Ipv6Unsupported.to_string(), "ipv6_unsupported");
    }

    #[test]
    fn test_display() {
        let entry = RejectedEntry::new("300.1.1.1/24", RejectReason::InvalidCidr);
        assert_eq!(entry.to_string(), "'300.1.1.1/24' (invalid_cidr)");
    }
}
