//! Networks and CIDR masks.
//!
//! Provides [`Network`] (an address paired with a prefix length) and [`Mask`]
//! (a prefix length paired with the total width it applies to).

use super::{Address, Family};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::str::FromStr;

/// Bit mask with the top `len` bits set, for a value `bits` wide.
///
/// # Examples
/// ```
/// use ipaddr_seq::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24, 32).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, bits: u8) -> Result<u128, Box<dyn Error>> {
    if Family::from_bits(bits).is_none() {
        Err(format!("Unsupported mask width {bits}").into())
    } else if len > bits {
        Err("Network length is too long".into())
    } else {
        let all_bits = u128::MAX >> (128 - u32::from(bits));
        let host_bits = u32::from(bits - len);
        Ok(all_bits & !u128::MAX.checked_shr(128 - host_bits).unwrap_or(0))
    }
}

/// CIDR mask: prefix length out of a total bit width.
///
/// Mirrors the `(ones, bits)` pair of a textual netmask; `bits` must be 32 or 128
/// for the mask to be usable with a [`Network`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    /// Number of leading one bits.
    pub prefix: u8,
    /// Total width of the mask in bits.
    pub bits: u8,
}

impl Mask {
    /// A valid CIDR mask, or None when `prefix > bits` or `bits` is not an address width.
    pub fn cidr(prefix: u8, bits: u8) -> Option<Mask> {
        match Family::from_bits(bits) {
            Some(_) if prefix <= bits => Some(Mask { prefix, bits }),
            _ => None,
        }
    }

    /// The netmask written out as an address, e.g. `255.255.192.0` for /18.
    pub fn netmask(&self) -> Option<Address> {
        let family = Family::from_bits(self.bits)?;
        let mask = get_cidr_mask(self.prefix, self.bits).ok()?;
        Some(Address::from_u128(family, mask))
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "/{} of {}", self.prefix, self.bits)
    }
}

/// An address range: the top `prefix` bits of `addr` are fixed.
///
/// Host bits of `addr` are not cleared on construction; operations that only touch the
/// prefix carry them through unchanged.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The base address.
    pub addr: Address,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub prefix: u8,
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Network {
    /// Create a new [`Network`] from a CIDR string (e.g., "10.0.0.0/24" or "2001:db8::/32").
    ///
    /// Host bits are kept as written.
    pub fn new(addr_cidr: &str) -> Result<Network, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Address = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix length {}", parts[1]))?;
        Network::from_parts(addr, prefix)
    }

    /// Pair an address with a prefix length, checking the length fits the family.
    pub fn from_parts(addr: Address, prefix: u8) -> Result<Network, Box<dyn Error>> {
        if prefix > addr.family().bits() {
            return Err(format!(
                "Network length {prefix} is too long for {}",
                addr.family().bits()
            )
            .into());
        }
        Ok(Network { addr, prefix })
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// Total width of the network's address in bits.
    pub fn bits(&self) -> u8 {
        self.family().bits()
    }

    /// The mask of this network.
    pub fn mask(&self) -> Mask {
        Mask {
            prefix: self.prefix,
            bits: self.bits(),
        }
    }

    /// Whether the prefix length fits the address width.
    pub fn is_valid(&self) -> bool {
        self.prefix <= self.bits()
    }

    /// Get the lowest (network) address, host bits cleared.
    pub fn lo(&self) -> Option<Address> {
        let mask = get_cidr_mask(self.prefix, self.bits()).ok()?;
        Some(Address::from_u128(self.family(), self.addr.to_u128() & mask))
    }

    /// True when every host bit of `addr` is zero.
    pub fn is_canonical(&self) -> bool {
        self.lo() == Some(self.addr)
    }
}

impl FromStr for Network {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Network, Self::Err> {
        Network::new(s)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
