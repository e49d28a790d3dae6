//! IPv4 address text codec and address arithmetic.
//!
//! Addresses are carried as [`Ipv4Addr`]; arithmetic is done on the
//! big-endian `u32` packing (first octet is the most significant byte).

use super::mask::{mask_from_prefix, MAX_LENGTH};
use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Parse dotted-decimal text into an [`Ipv4Addr`].
///
/// Exactly four `.`-separated octets are required, each a decimal literal in
/// 0-255 without sign, whitespace or leading zeros.
///
/// # Examples
/// ```
/// use subnet_vlsm::models::parse_address;
/// assert_eq!(parse_address("192.168.1.10").unwrap().octets(), [192, 168, 1, 10]);
/// assert!(parse_address("192.168.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let text = text.trim();
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(SubnetError::Format(format!(
            "expected 4 octets in '{text}', found {}",
            tokens.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(&tokens) {
        *octet = parse_octet(token).ok_or_else(|| {
            SubnetError::Format(format!("'{token}' is not a valid octet in '{text}'"))
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// Format an address as four decimal octets joined by `.`.
pub fn format_address(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{a}.{b}.{c}.{d}")
}

/// Big-endian `u32` packing of an address.
pub fn address_to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`address_to_u32`].
pub fn u32_to_address(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = mask_from_prefix(len)?;
    Ok(u32_to_address(address_to_u32(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = mask_from_prefix(len)?;
    let network_bits = address_to_u32(addr) & mask;
    Ok(u32_to_address(network_bits | !mask))
}

/// An address paired with a prefix length, displayed as `a.b.c.d/len`.
///
/// The address is kept as given; it is not cut down to the network address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| SubnetError::Format(format!("missing '/' in '{addr_cidr}'")))?;
        let addr = parse_address(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| SubnetError::InvalidMask(mask.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(SubnetError::InvalidMask(format!("/{mask} is too long")));
        }
        Ok(Ipv4 { addr, mask })
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(parse_address(" 0.0.0.0 ").unwrap(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(
            parse_address("255.255.255.255").unwrap(),
            Ipv4Addr::BROADCAST
        );
        assert_eq!(
            address_to_u32(parse_address("10.0.0.1").unwrap()),
            0x0A00_0001
        );
    }

    #[test]
    fn test_parse_address_rejects() {
        for bad in [
            "",
            "192.168.1",
            "192.168.1.1.1",
            "192.168.1.256",
            "192.168..1",
            "192.168.1.-1",
            "192.168.1.+1",
            "192.168.1.a",
            "192.168.1. 1",
            "192.168.01.1",
            "1000.0.0.0",
        ] {
            assert!(
                matches!(parse_address(bad), Err(SubnetError::Format(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_parse_round_trip() {
        for bits in (0..=u32::MAX).step_by(65_537) {
            let addr = u32_to_address(bits);
            assert_eq!(parse_address(&format_address(addr)).unwrap(), addr);
        }
        assert_eq!(format_address(u32_to_address(u32::MAX)), "255.255.255.255");
        for text in ["192.168.1.10", "10.0.0.0", "172.16.254.3"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }

    #[test]
    fn test_ipv4_cidr() {
        let cidr = Ipv4::new("10.1.1.0/28").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(cidr.mask, 28);
        assert_eq!(cidr.to_string(), "10.1.1.0/28");
        assert!(Ipv4::new("10.1.1.0").is_err());
        assert!(Ipv4::new("10.1.1.0/33").is_err());
        assert_eq!(serde_json::to_string(&cidr).unwrap(), "\"10.1.1.0/28\"");
    }
}
