//! IPv4 address codec and CIDR notation utilities.
//!
//! Addresses are held as [`Ipv4Addr`] and all arithmetic runs on their `u32`
//! form. [`Cidr`] pairs an address with a prefix length.

use super::error::{ErrorKind, VlsmError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a strict dotted-decimal IPv4 address.
///
/// Exactly four groups of decimal digits, each in `0..=255`. A group may
/// only start with `0` if it is exactly `"0"`.
///
/// # Examples
/// ```
/// use vlsm_planner::models::parse_address;
/// assert!(parse_address("192.168.1.1").is_ok());
/// assert!(parse_address("192.168.01.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, VlsmError> {
    let mut octets = [0u8; 4];
    let mut groups = text.split('.');

    for octet in octets.iter_mut() {
        let group = groups
            .next()
            .ok_or_else(|| VlsmError::invalid_address(text))?;
        *octet = parse_octet(group).ok_or_else(|| VlsmError::invalid_address(text))?;
    }
    if groups.next().is_some() {
        return Err(VlsmError::invalid_address(text));
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if group.len() > 1 && group.starts_with('0') {
        return None;
    }
    group.parse::<u8>().ok()
}

/// Parse `address/prefix` into its address and prefix length.
///
/// A bad address part yields [`ErrorKind::InvalidAddress`], anything wrong
/// with the suffix yields [`ErrorKind::InvalidCidr`].
pub fn parse_cidr(text: &str) -> Result<(Ipv4Addr, u8), VlsmError> {
    let (addr_part, prefix_part) = text
        .split_once('/')
        .ok_or_else(|| VlsmError::invalid_cidr(text, "missing prefix suffix"))?;

    let addr = parse_address(addr_part)?;

    if prefix_part.is_empty()
        || prefix_part.len() > 2
        || !prefix_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(VlsmError::invalid_cidr(text, "prefix is not a number"));
    }
    let prefix: u8 = prefix_part
        .parse()
        .map_err(|_| VlsmError::invalid_cidr(text, "prefix is not a number"))?;
    if prefix > MAX_LENGTH {
        return Err(VlsmError::invalid_cidr(text, "prefix must be between 0 and 32"));
    }

    Ok((addr, prefix))
}

/// Convert a prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use vlsm_planner::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), Ipv4Addr::new(255, 255, 255, 0));
/// ```
pub fn mask_from_prefix(len: u8) -> Result<Ipv4Addr, VlsmError> {
    if len > MAX_LENGTH {
        return Err(VlsmError::new(
            ErrorKind::InvalidCidr,
            format!("prefix /{len} is longer than {MAX_LENGTH}"),
        ));
    }
    // u64 so that a shift by 32 is defined
    let right_len = MAX_LENGTH - len;
    let mask = (u64::from(u32::MAX) >> right_len) << right_len;
    Ok(Ipv4Addr::from(mask as u32))
}

pub fn ip_and(a: Ipv4Addr, b: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(a) & u32::from(b))
}

pub fn ip_or(a: Ipv4Addr, b: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(a) | u32::from(b))
}

pub fn ip_not(a: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(!u32::from(a))
}

/// Return the address one above `addr`.
///
/// Fails with [`ErrorKind::AddressSpaceExhausted`] past `255.255.255.255`.
pub fn increment(addr: Ipv4Addr) -> Result<Ipv4Addr, VlsmError> {
    u32::from(addr)
        .checked_add(1)
        .map(Ipv4Addr::from)
        .ok_or_else(VlsmError::exhausted)
}

/// Smallest power of two strictly greater than `n`.
///
/// A power of two is never returned for itself: `4` gives `8`.
/// `None` if the result does not fit in a `u64`.
pub fn next_power_of_two(n: u64) -> Option<u64> {
    n.checked_add(1)?.checked_next_power_of_two()
}

pub fn octets_to_u32(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

pub fn u32_to_octets(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// IPv4 address with a prefix length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as written, not necessarily the network address.
    pub addr: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from text such as `"10.0.0.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Cidr, VlsmError> {
        let (addr, prefix) = parse_cidr(addr_cidr.trim())?;
        Ok(Cidr { addr, prefix })
    }

    pub fn mask(&self) -> Ipv4Addr {
        mask_from_prefix(self.prefix.min(MAX_LENGTH)).unwrap_or(Ipv4Addr::BROADCAST)
    }

    /// Lowest (network) address of the block.
    pub fn network(&self) -> Ipv4Addr {
        ip_and(self.addr, self.mask())
    }

    /// Highest (broadcast) address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        ip_or(self.network(), ip_not(self.mask()))
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix.min(MAX_LENGTH))
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network() <= addr && addr <= self.broadcast()
    }
}

impl FromStr for Cidr {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}
