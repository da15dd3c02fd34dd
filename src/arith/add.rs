//! Byte wise addition of a signed offset to an address.

use crate::models::Address;

/// Add `value` to `addr`, returning None on overflow or underflow.
///
/// IPv4-mapped IPv6 input is shortened to IPv4 first, so the result keeps the
/// shortest form of the address.
///
/// # Examples
/// ```
/// use ipaddr_seq::{add, models::Address};
/// let ip: Address = "10.0.0.1".parse().unwrap();
/// assert_eq!(add(ip, -2), Some("9.255.255.255".parse().unwrap()));
/// assert_eq!(add(ip, 3), Some("10.0.0.4".parse().unwrap()));
/// ```
pub fn add(addr: Address, value: i64) -> Option<Address> {
    let mut sum = addr.unmap();

    let fits = if value < 0 {
        borrow_sub(sum.as_bytes_mut(), value.unsigned_abs())
    } else {
        carry_add(sum.as_bytes_mut(), value.unsigned_abs())
    };

    if fits {
        Some(sum)
    } else {
        log::trace!("add({addr}, {value}) leaves the address space");
        None
    }
}

/// Add `val` from the least significant byte up. False if a carry is left over.
fn carry_add(bytes: &mut [u8], mut val: u64) -> bool {
    for b in bytes.iter_mut().rev() {
        let added = u128::from(*b) + u128::from(val);
        if added > 255 {
            *b = (added % 256) as u8;
            val = (added / 256) as u64;
            continue;
        }
        *b = added as u8;
        return true;
    }
    false
}

/// Subtract `dist` one base-256 digit at a time. False if a borrow is left over.
fn borrow_sub(bytes: &mut [u8], mut dist: u64) -> bool {
    for b in bytes.iter_mut().rev() {
        let mut borrow = dist / 256;
        let mut v = i16::from(*b) - (dist % 256) as i16;
        if v < 0 {
            v += 256;
            borrow += 1;
        }
        *b = v as u8;

        if borrow == 0 {
            return true;
        }
        dist = borrow;
    }
    false
}
