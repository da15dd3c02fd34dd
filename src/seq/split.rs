//! Partitioning a network into equal sized children.

use super::{Cursor, NetSeq};
use crate::models::{block_count, Address, Mask, Network};

/// Lazy sequence of the subnetworks of `orig` with `mask`'s prefix length, in
/// ascending order.
///
/// Each child is `orig.addr` with the child index OR'ed in just above the new host
/// bits; host bits already set in `orig.addr` are not cleared and show up in every
/// child. The sequence is empty when `mask` is shorter than `orig`'s prefix or is for
/// another address width.
///
/// # Examples
/// ```
/// use ipaddr_seq::{split, CancelToken, models::{Mask, Network}};
/// let cancel = CancelToken::new();
/// let orig = Network::new("10.0.0.0/16").unwrap();
/// let got: Vec<String> = split(orig, Mask { prefix: 18, bits: 32 })
///     .all(&cancel)
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(got, ["10.0.0.0/18", "10.0.64.0/18", "10.0.128.0/18", "10.0.192.0/18"]);
/// ```
pub fn split(orig: Network, mask: Mask) -> NetSeq {
    if mask.bits != orig.bits() {
        log::debug!("split({orig}, {mask}): mask width does not match the address");
        return NetSeq::empty();
    }
    if mask.prefix < orig.prefix || mask.prefix > mask.bits {
        log::debug!("split({orig}, {mask}): target prefix out of range");
        return NetSeq::empty();
    }

    NetSeq::from_cursor(Cursor::Split(SplitCursor {
        base: orig.addr,
        prefix: mask.prefix,
        offset: u32::from(mask.bits - mask.prefix),
        count: block_count(mask.prefix - orig.prefix),
        next: Some(0),
    }))
}

/// Iteration state for [`split`]: the next child index, if any.
#[derive(Debug)]
pub(crate) struct SplitCursor {
    base: Address,
    prefix: u8,
    offset: u32,
    /// None stands for 2^128 children.
    count: Option<u128>,
    next: Option<u128>,
}

impl SplitCursor {
    pub(crate) fn advance(&mut self) -> Option<Network> {
        let i = self.next.take()?;

        let count = self.count;
        self.next = i
            .checked_add(1)
            .filter(|n| count.map_or(true, |c| *n < c));

        let v = i.checked_shl(self.offset).unwrap_or(0);
        let mut addr = self.base;
        let family = addr.family();
        for (b, d) in addr
            .as_bytes_mut()
            .iter_mut()
            .zip(Address::from_u128(family, v).as_bytes())
        {
            *b |= *d;
        }

        Some(Network {
            addr,
            prefix: self.prefix,
        })
    }
}
