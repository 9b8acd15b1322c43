//! Domain models for IP list aggregation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Block`] - IPv4 network in canonical CIDR form
//! - [`BlockSet`] - value-unique, address-ordered set of blocks
//! - [`RejectedEntry`] - input that could not be normalized, with its [`RejectReason`]

mod block;
mod block_set;
mod rejected;

// Re-export public types
pub use block::{lo_mask, Block, MAX_LENGTH};
pub use block_set::BlockSet;
pub use rejected::{RejectReason, RejectedEntry};
