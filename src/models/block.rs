//! Block index: the prefix bits of an address read as an unsigned integer.
//!
//! IPv6 prefixes need up to 128 bits, so the index is a `u128` for both families.
//! The number of blocks for a /128 prefix (2^128) does not fit; [`block_count`]
//! returns None for that case and callers treat it as unbounded.

use super::{Address, Family};

/// Prefix bits of an address, right aligned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockIndex(pub u128);

/// Number of distinct blocks of a given prefix length, None when it is 2^128.
pub fn block_count(prefix: u8) -> Option<u128> {
    1u128.checked_shl(u32::from(prefix))
}

impl BlockIndex {
    /// Read the top `prefix` bits of `addr`. None if `prefix` is wider than the address.
    pub fn of(addr: &Address, prefix: u8) -> Option<BlockIndex> {
        let bits = addr.family().bits();
        if prefix > bits {
            return None;
        }
        let host_bits = u32::from(bits - prefix);
        Some(BlockIndex(
            addr.to_u128().checked_shr(host_bits).unwrap_or(0),
        ))
    }

    /// Shift the index back into address position, host bits zero.
    pub fn to_address(self, family: Family, prefix: u8) -> Address {
        let host_bits = u32::from(family.bits().saturating_sub(prefix));
        Address::from_u128(family, self.0.checked_shl(host_bits).unwrap_or(0))
    }

    /// True while the index names a block of `prefix` length.
    pub fn in_range(self, prefix: u8) -> bool {
        match block_count(prefix) {
            Some(count) => self.0 < count,
            None => true,
        }
    }

    pub fn checked_add(self, step: u128) -> Option<BlockIndex> {
        self.0.checked_add(step).map(BlockIndex)
    }

    pub fn checked_sub(self, step: u128) -> Option<BlockIndex> {
        self.0.checked_sub(step).map(BlockIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(0), Some(1));
        assert_eq!(block_count(8), Some(256));
        assert_eq!(block_count(32), Some(1 << 32));
        assert_eq!(block_count(127), Some(1 << 127));
        assert_eq!(block_count(128), None);
    }

    #[test]
    fn test_block_index_of() {
        let ip: Address = "10.2.0.0".parse().unwrap();
        assert_eq!(BlockIndex::of(&ip, 16), Some(BlockIndex(0x0a02)));
        assert_eq!(BlockIndex::of(&ip, 8), Some(BlockIndex(10)));
        assert_eq!(BlockIndex::of(&ip, 0), Some(BlockIndex(0)));
        assert_eq!(BlockIndex::of(&ip, 33), None);

        let ip6: Address = "2001:db8:2000::".parse().unwrap();
        assert_eq!(BlockIndex::of(&ip6, 35), Some(BlockIndex(0x2001_0db8 << 3 | 1)));
        assert_eq!(BlockIndex::of(&ip6, 0), Some(BlockIndex(0)));
        assert_eq!(
            BlockIndex::of(&ip6, 128),
            Some(BlockIndex(ip6.to_u128()))
        );
    }

    #[test]
    fn test_block_index_to_address() {
        assert_eq!(
            BlockIndex(0x0a08).to_address(Family::V4, 16),
            "10.8.0.0".parse::<Address>().unwrap()
        );
        assert_eq!(
            BlockIndex(0).to_address(Family::V6, 0),
            Address::zero(Family::V6)
        );
        assert_eq!(
            BlockIndex(0xffff).to_address(Family::V6, 16),
            "ffff::".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_in_range() {
        assert!(BlockIndex(255).in_range(8));
        assert!(!BlockIndex(256).in_range(8));
        assert!(BlockIndex(u128::MAX).in_range(128));
        assert!(BlockIndex(0).in_range(0));
        assert!(!BlockIndex(1).in_range(0));
    }
}
