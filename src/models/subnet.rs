//! VLSM allocation entries.

use super::ipv4::Ipv4;
use super::mask::MAX_LENGTH;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One subnet carved out of the parent block for a host demand.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlsmSubnet {
    pub network: Ipv4Addr,
    pub prefix_length: u8,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// The host demand this subnet was sized for.
    pub requested_hosts: u32,
}

impl VlsmSubnet {
    /// The subnet in CIDR notation.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix_length,
        }
    }

    /// Addresses in the block, network and broadcast included.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_length)
    }

    /// Hosts the block can hold once network and broadcast are removed.
    pub fn usable_hosts(&self) -> u64 {
        self.block_size() - 2
    }
}

/// Outcome of allocating a single host demand.
///
/// Failures are kept in the sequence as data so one bad demand does not
/// abort the rest of the plan.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Allocation {
    Allocated(VlsmSubnet),
    /// The demand does not fit inside the parent block.
    Overflow { requested_hosts: u32 },
    /// The whole run was invalid (parent prefix or base address).
    Error { requested_hosts: u32 },
}

impl Allocation {
    pub fn subnet(&self) -> Option<&VlsmSubnet> {
        match self {
            Allocation::Allocated(subnet) => Some(subnet),
            _ => None,
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.subnet().is_some()
    }

    pub fn requested_hosts(&self) -> u32 {
        match self {
            Allocation::Allocated(subnet) => subnet.requested_hosts,
            Allocation::Overflow { requested_hosts } | Allocation::Error { requested_hosts } => {
                *requested_hosts
            }
        }
    }

    /// Short status word used in reports.
    pub fn status(&self) -> &'static str {
        match self {
            Allocation::Allocated(_) => "Allocated",
            Allocation::Overflow { .. } => "Overflow",
            Allocation::Error { .. } => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VlsmSubnet {
        VlsmSubnet {
            network: Ipv4Addr::new(192, 168, 1, 0),
            prefix_length: 25,
            first_host: Ipv4Addr::new(192, 168, 1, 1),
            last_host: Ipv4Addr::new(192, 168, 1, 126),
            broadcast: Ipv4Addr::new(192, 168, 1, 127),
            requested_hosts: 100,
        }
    }

    #[test]
    fn test_vlsm_subnet_sizes() {
        let subnet = sample();
        assert_eq!(subnet.cidr().to_string(), "192.168.1.0/25");
        assert_eq!(subnet.block_size(), 128);
        assert_eq!(subnet.usable_hosts(), 126);
    }

    #[test]
    fn test_allocation_accessors() {
        let ok = Allocation::Allocated(sample());
        let overflow = Allocation::Overflow {
            requested_hosts: 10,
        };
        let error = Allocation::Error { requested_hosts: 5 };

        assert!(ok.is_allocated());
        assert!(!overflow.is_allocated());
        assert_eq!(ok.requested_hosts(), 100);
        assert_eq!(overflow.requested_hosts(), 10);
        assert_eq!(error.requested_hosts(), 5);
        assert_eq!(overflow.status(), "Overflow");
        assert_eq!(error.status(), "Error");
    }

    #[test]
    fn test_allocation_json_tag() {
        let json = serde_json::to_value(Allocation::Allocated(sample())).unwrap();
        assert_eq!(json["status"], "allocated");
        assert_eq!(json["network"], "192.168.1.0");
        assert_eq!(json["prefix_length"], 25);

        let json = serde_json::to_value(Allocation::Overflow {
            requested_hosts: 10,
        })
        .unwrap();
        assert_eq!(json["status"], "overflow");
        assert_eq!(json["requested_hosts"], 10);
    }
}
