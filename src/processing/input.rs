//! Normalisation of raw user text for the VLSM calculator.
//!
//! Accepts the looser forms people type at a prompt: partial addresses,
//! binary octets, `/N` masks and comma separated host lists.

use crate::error::SubnetError;
use crate::models::{format_address, prefix_from_dotted, MAX_LENGTH};
use itertools::Itertools;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Four dot-separated groups of exactly eight binary digits.
static BINARY_ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_binary_address_regex() -> &'static Regex {
    BINARY_ADDRESS_REGEX
        .get_or_init(|| Regex::new(r"^[01]{8}(\.[01]{8}){3}$").expect("Invalid Regex"))
}

/// Normalise a base address into canonical dotted-decimal text.
///
/// * `11000000.10101000.00000001.00000000` - binary octets, converted to decimal
/// * `10`, `172.16`, `192.168.1` - partial address, padded with `.0` segments
/// * `192.168.1.0` - returned in canonical form
///
/// # Examples
/// ```
/// use subnet_vlsm::processing::normalize_address;
/// assert_eq!(normalize_address("172.16").unwrap(), "172.16.0.0");
/// assert_eq!(
///     normalize_address("00001010.00000000.00000001.00000000").unwrap(),
///     "10.0.1.0"
/// );
/// ```
pub fn normalize_address(raw: &str) -> Result<String, SubnetError> {
    let text = raw.trim();
    let segments: Vec<&str> = text.split('.').collect();

    if segments[0].len() == 8 {
        if !get_binary_address_regex().is_match(text) {
            return Err(SubnetError::InvalidAddress(format!(
                "'{text}' is not four 8-bit binary octets"
            )));
        }
        let mut octets = [0u8; 4];
        for (octet, segment) in octets.iter_mut().zip(&segments) {
            *octet = u8::from_str_radix(segment, 2)
                .map_err(|e| SubnetError::InvalidAddress(format!("'{segment}': {e}")))?;
        }
        log::trace!("normalize_address({text}) binary form");
        return Ok(format_address(Ipv4Addr::from(octets)));
    }

    if segments.len() > 4 {
        return Err(SubnetError::InvalidAddress(format!(
            "'{text}' has more than 4 octets"
        )));
    }

    // Missing trailing octets stay 0.
    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidAddress(format!(
                "'{segment}' is not a valid octet in '{text}'"
            )));
        }
        *octet = segment.parse().map_err(|_| {
            SubnetError::InvalidAddress(format!("'{segment}' is out of range in '{text}'"))
        })?;
    }
    Ok(format_address(Ipv4Addr::from(octets)))
}

/// Parse a mask given as dotted-decimal, `/N` or bare `N` into a prefix length.
///
/// Dotted-decimal text must match an entry of [`crate::models::MASKS`] exactly.
pub fn parse_mask_spec(raw: &str) -> Result<u8, SubnetError> {
    let text = raw.trim();
    if text.contains('.') {
        return prefix_from_dotted(text).ok_or_else(|| {
            SubnetError::InvalidMask(format!("'{text}' is not a canonical subnet mask"))
        });
    }

    let digits = text.strip_prefix('/').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidMask(format!(
            "'{text}' is not a prefix length"
        )));
    }
    match digits.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(SubnetError::InvalidMask(format!(
            "/{digits} is longer than /{MAX_LENGTH}"
        ))),
    }
}

/// Parse comma separated host demands and sort them largest first.
///
/// # Examples
/// ```
/// use subnet_vlsm::processing::parse_host_demand_list;
/// assert_eq!(parse_host_demand_list("100, 20,50").unwrap(), vec![100, 50, 20]);
/// assert!(parse_host_demand_list("100,abc").is_err());
/// ```
pub fn parse_host_demand_list(raw: &str) -> Result<Vec<u32>, SubnetError> {
    let demands: Vec<u32> = raw
        .split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| SubnetError::InvalidInput(format!("'{token}'")))
        })
        .collect::<Result<_, _>>()?;

    Ok(demands.into_iter().sorted_unstable_by(|a, b| b.cmp(a)).collect())
}
