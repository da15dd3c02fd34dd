//! Adjacent sibling networks.
//!
//! The prefix bits are treated as an unsigned integer and stepped by one. Host bits
//! below the prefix are copied through untouched, so a network with stray host bits
//! keeps them in the result.

use crate::models::Network;

/// Returns the greater adjacent network of the same prefix length, or None if `nt` is
/// the last one.
///
/// # Examples
/// ```
/// use ipaddr_seq::{next, models::Network};
/// let nt = Network::new("10.0.0.0/16").unwrap();
/// assert_eq!(next(nt), Some(Network::new("10.1.0.0/16").unwrap()));
/// ```
pub fn next(nt: Network) -> Option<Network> {
    step_prefix(nt, false)
}

/// Returns the lesser adjacent network of the same prefix length, or None if `nt` is
/// the first one.
///
/// # Examples
/// ```
/// use ipaddr_seq::{prev, models::Network};
/// let nt = Network::new("10.0.0.0/16").unwrap();
/// assert_eq!(prev(nt), Some(Network::new("9.255.0.0/16").unwrap()));
/// ```
pub fn prev(nt: Network) -> Option<Network> {
    step_prefix(nt, true)
}

/// Scan prefix bits from the least significant one upwards for a bit equal to
/// `stop_at`. That bit is flipped and the scan ends; every bit passed on the way is
/// flipped too (carry for `next`, borrow for `prev`).
fn step_prefix(nt: Network, stop_at: bool) -> Option<Network> {
    if !nt.is_valid() {
        log::debug!("{nt}: prefix wider than the address");
        return None;
    }

    let mut res = nt;
    if flip_until(res.addr.as_bytes_mut(), nt.prefix, stop_at) {
        Some(res)
    } else {
        None
    }
}

fn flip_until(bytes: &mut [u8], prefix: u8, stop_at: bool) -> bool {
    for i in (0..usize::from(prefix)).rev() {
        let (a, b) = (i / 8, 7 - (i % 8));
        let bit = 1u8 << b;
        let is_set = bytes[a] & bit != 0;
        bytes[a] ^= bit;
        if is_set == stop_at {
            return true;
        }
    }
    false
}
