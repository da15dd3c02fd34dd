//! Value types for address arithmetic.
//!
//! - [`Address`] - fixed width IPv4 / IPv6 address bytes
//! - [`Network`] and [`Mask`] - CIDR networks and masks
//! - [`BlockIndex`] - prefix bits read as an unsigned integer

mod address;
mod block;
mod network;

// Re-export public types
pub use address::{Address, Family, IPV4_LEN, IPV6_LEN};
pub use block::{block_count, BlockIndex};
pub use network::{get_cidr_mask, Mask, Network};
