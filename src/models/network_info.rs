//! Result record of a single address/mask calculation.

use super::ipv4::{format_address, Ipv4};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Boundaries and host capacity of the network an address belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Address with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    pub first_usable_address: Ipv4Addr,
    pub last_usable_address: Ipv4Addr,
    /// Usable hosts, `2^host_bits - 2`.
    pub total_hosts: u64,
    /// Number of one bits in the mask.
    pub prefix_length: u8,
    pub subnet_mask: Ipv4Addr,
}

impl NetworkInfo {
    /// The network in CIDR notation.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network_address,
            mask: self.prefix_length,
        }
    }
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} - {}] broadcast {} ({} hosts)",
            self.cidr(),
            format_address(self.first_usable_address),
            format_address(self.last_usable_address),
            format_address(self.broadcast_address),
            self.total_hosts
        )
    }
}
