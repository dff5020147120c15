//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing a network as address plus
//! prefix length, along with the mask arithmetic the allocator is built on.

use crate::error::Ipv4Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;
/// Smallest base prefix the planner accepts.
pub const MIN_BASE_PREFIX: u8 = 8;
/// Largest base prefix the planner accepts.
pub const MAX_BASE_PREFIX: u8 = 30;
/// Longest prefix ever allocated; /31 and /32 have no network+broadcast pair.
pub const MAX_SUBNET_PREFIX: u8 = 30;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Ipv4Error> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// The wildcard mask for a prefix length: the bitwise complement of the
/// subnet mask, as used in ACL/routing configuration.
pub fn wildcard_mask(len: u8) -> Result<u32, Ipv4Error> {
    Ok(!get_cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length (host bits zeroed).
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Ipv4Error> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Ipv4Error> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::PrefixTooLong(len))
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Total number of addresses in a subnet of the given prefix length.
pub fn subnet_size(len: u8) -> Result<u64, Ipv4Error> {
    if len > MAX_LENGTH {
        Err(Ipv4Error::PrefixTooLong(len))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses in a subnet: total minus the network
/// and broadcast addresses. Only defined up to /30.
pub fn usable_hosts(len: u8) -> Result<u64, Ipv4Error> {
    if len > MAX_SUBNET_PREFIX {
        Err(Ipv4Error::NoUsableHosts(len))
    } else {
        Ok(subnet_size(len)? - 2)
    }
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Ipv4Error> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(Ipv4Error::InvalidCidr(addr_cidr.to_string()));
        }
        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| Ipv4Error::InvalidAddress(parts[0].to_string()))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| Ipv4Error::InvalidPrefix(parts[1].to_string()))?;
        if mask > MAX_LENGTH {
            return Err(Ipv4Error::PrefixTooLong(mask));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the broadcast address for this subnet.
    pub fn broadcast(&self) -> Result<Ipv4, Ipv4Error> {
        let broadcast = broadcast_addr(self.addr, self.mask)?;
        Ok(Ipv4 {
            addr: broadcast,
            mask: self.mask,
        })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {}: {}", self, e))
    }

    /// Total number of addresses in this subnet.
    pub fn num_addresses(&self) -> u64 {
        subnet_size(self.mask)
            .unwrap_or_else(|e| panic!("Error calculating size for {}: {}", self, e))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Supernet containment: check that the other subnet's full range
    /// falls within this network's range.
    pub fn contains_subnet(&self, other: &Ipv4) -> bool {
        self.contains(other.lo()) && self.contains(other.hi())
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
