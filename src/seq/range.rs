//! Stepped enumeration of sibling networks.

use super::{Cursor, NetSeq};
use crate::models::{BlockIndex, Family, Network};

/// Lazy sequence of networks with `start`'s prefix length, beginning at `start` and
/// moving `step` blocks at a time.
///
/// A positive step walks up and stops before the block index reaches 2^prefix; a
/// negative step walks down and stops before it goes below zero. The emitted networks
/// have their host bits cleared. A zero step or an invalid prefix gives an empty
/// sequence.
///
/// # Examples
/// ```
/// use ipaddr_seq::{range, CancelToken, models::Network};
/// let cancel = CancelToken::new();
/// let start = Network::new("10.0.0.0/16").unwrap();
/// let got: Vec<String> = range(start, 2)
///     .take(&cancel, 3)
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(got, ["10.0.0.0/16", "10.2.0.0/16", "10.4.0.0/16"]);
/// ```
pub fn range(start: Network, step: i64) -> NetSeq {
    if step == 0 {
        log::debug!("range({start}, 0): zero step, nothing to enumerate");
        return NetSeq::empty();
    }
    let Some(cur) = BlockIndex::of(&start.addr, start.prefix) else {
        log::debug!("range({start}, {step}): prefix wider than the address");
        return NetSeq::empty();
    };

    NetSeq::from_cursor(Cursor::Range(RangeCursor {
        family: start.family(),
        prefix: start.prefix,
        cur: Some(cur),
        step: u128::from(step.unsigned_abs()),
        forward: step > 0,
    }))
}

/// Iteration state for [`range`]: the next block to emit, if any.
#[derive(Debug)]
pub(crate) struct RangeCursor {
    family: Family,
    prefix: u8,
    cur: Option<BlockIndex>,
    step: u128,
    forward: bool,
}

impl RangeCursor {
    pub(crate) fn advance(&mut self) -> Option<Network> {
        let cur = self.cur.take()?;

        self.cur = if self.forward {
            cur.checked_add(self.step)
                .filter(|next| next.in_range(self.prefix))
        } else {
            cur.checked_sub(self.step)
        };

        Some(Network {
            addr: cur.to_address(self.family, self.prefix),
            prefix: self.prefix,
        })
    }
}
