//! Fixed width IP addresses.
//!
//! Provides [`Address`], a byte level IPv4 / IPv6 value (most significant byte first),
//! and the [`Family`] tag used to pick the width dependent constants.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Number of bytes in an IPv4 address.
pub const IPV4_LEN: usize = 4;
/// Number of bytes in an IPv6 address.
pub const IPV6_LEN: usize = 16;

/// Address family, IPv4 (32 bit) or IPv6 (128 bit).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of the family in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => (IPV4_LEN * 8) as u8,
            Family::V6 => (IPV6_LEN * 8) as u8,
        }
    }

    /// Width of the family in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            Family::V4 => IPV4_LEN,
            Family::V6 => IPV6_LEN,
        }
    }

    /// Family matching a total mask width in bits, if any.
    pub fn from_bits(bits: u8) -> Option<Family> {
        match bits {
            32 => Some(Family::V4),
            128 => Some(Family::V6),
            _ => None,
        }
    }
}

/// An immutable IP address stored as raw bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Address {
    V4([u8; IPV4_LEN]),
    V6([u8; IPV6_LEN]),
}

impl Address {
    /// Build an address from a 4 or 16 byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Option<Address> {
        match bytes.len() {
            IPV4_LEN => {
                let mut b = [0u8; IPV4_LEN];
                b.copy_from_slice(bytes);
                Some(Address::V4(b))
            }
            IPV6_LEN => {
                let mut b = [0u8; IPV6_LEN];
                b.copy_from_slice(bytes);
                Some(Address::V6(b))
            }
            _ => None,
        }
    }

    /// All zero address of the given family.
    pub fn zero(family: Family) -> Address {
        match family {
            Family::V4 => Address::V4([0; IPV4_LEN]),
            Family::V6 => Address::V6([0; IPV6_LEN]),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(b) => &b[..],
            Address::V6(b) => &b[..],
        }
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Address::V4(b) => &mut b[..],
            Address::V6(b) => &mut b[..],
        }
    }

    /// The address as an unsigned integer (IPv4 values occupy the low 32 bits).
    pub fn to_u128(&self) -> u128 {
        self.as_bytes()
            .iter()
            .fold(0u128, |acc, b| (acc << 8) | u128::from(*b))
    }

    /// Rebuild an address of `family` from the low bits of `value`.
    pub fn from_u128(family: Family, value: u128) -> Address {
        match family {
            Family::V4 => Address::V4((value as u32).to_be_bytes()),
            Family::V6 => Address::V6(value.to_be_bytes()),
        }
    }

    /// Shortest form of the address: an IPv4-mapped IPv6 address becomes IPv4.
    ///
    /// ```
    /// use ipaddr_seq::models::Address;
    /// let mapped: Address = "::ffff:10.0.0.1".parse().unwrap();
    /// assert_eq!(mapped.unmap(), "10.0.0.1".parse::<Address>().unwrap());
    /// ```
    pub fn unmap(self) -> Address {
        match self {
            Address::V6(b) => match Ipv6Addr::from(b).to_ipv4_mapped() {
                Some(v4) => Address::V4(v4.octets()),
                None => self,
            },
            v4 => v4,
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::V6(addr.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(a) => a.into(),
            IpAddr::V6(a) => a.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        match addr {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl FromStr for Address {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Address, Self::Err> {
        let addr: IpAddr = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid address {s}"))?;
        Ok(addr.into())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(de::Error::custom)
    }
}
