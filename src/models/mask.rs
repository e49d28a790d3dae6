//! Subnet mask validation and prefix conversions.

use crate::error::SubnetError;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Canonical dotted-decimal masks, indexed by prefix length.
pub const MASKS: [&str; 33] = [
    "0.0.0.0",
    "128.0.0.0",
    "192.0.0.0",
    "224.0.0.0",
    "240.0.0.0",
    "248.0.0.0",
    "252.0.0.0",
    "254.0.0.0",
    "255.0.0.0",
    "255.128.0.0",
    "255.192.0.0",
    "255.224.0.0",
    "255.240.0.0",
    "255.248.0.0",
    "255.252.0.0",
    "255.254.0.0",
    "255.255.0.0",
    "255.255.128.0",
    "255.255.192.0",
    "255.255.224.0",
    "255.255.240.0",
    "255.255.248.0",
    "255.255.252.0",
    "255.255.254.0",
    "255.255.255.0",
    "255.255.255.128",
    "255.255.255.192",
    "255.255.255.224",
    "255.255.255.240",
    "255.255.255.248",
    "255.255.255.252",
    "255.255.255.254",
    "255.255.255.255",
];

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_vlsm::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn mask_from_prefix(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidMask(format!("/{len} is too long")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// True if the mask is a run of ones followed by a run of zeros.
///
/// Walks the bits from the most significant end; once a zero has been seen
/// no further one may follow.
pub fn is_contiguous_mask(mask: u32) -> bool {
    let mut seen_zero = false;
    for i in 0..MAX_LENGTH {
        if mask & (1u32 << (31 - i)) == 0 {
            seen_zero = true;
        } else if seen_zero {
            return false;
        }
    }
    true
}

/// True if the mask is contiguous and leaves a usable host range.
///
/// /32 and /31 masks have no network/broadcast pair with hosts between them.
pub fn is_valid_host_mask(mask: u32) -> bool {
    mask != 0xFFFF_FFFF && mask != 0xFFFF_FFFE && is_contiguous_mask(mask)
}

/// Population count of the mask.
pub fn count_set_bits(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// Prefix length of a contiguous mask.
pub fn prefix_from_mask(mask: u32) -> Result<u8, SubnetError> {
    if !is_contiguous_mask(mask) {
        return Err(SubnetError::InvalidMask(format!(
            "{mask:#010x} is not contiguous"
        )));
    }
    Ok(count_set_bits(mask))
}

/// Canonical dotted-decimal text for a prefix length.
pub fn dotted_from_prefix(len: u8) -> Option<&'static str> {
    MASKS.get(len as usize).copied()
}

/// Look up dotted-decimal mask text in [`MASKS`].
///
/// Text not present in the table is not a mask, even if it would decode to one.
pub fn prefix_from_dotted(text: &str) -> Option<u8> {
    MASKS
        .iter()
        .position(|mask| *mask == text.trim())
        .map(|len| len as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{address_to_u32, parse_address};

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(mask_from_prefix(0).unwrap(), 0x00000000);
        assert_eq!(mask_from_prefix(8).unwrap(), 0xFF000000);
        assert_eq!(mask_from_prefix(16).unwrap(), 0xFFFF0000);
        assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
        assert_eq!(mask_from_prefix(32).unwrap(), 0xFFFFFFFF);
        assert!(mask_from_prefix(33).is_err());
    }

    #[test]
    fn test_prefix_bits() {
        for len in 0..=MAX_LENGTH {
            let mask = mask_from_prefix(len).unwrap();
            assert_eq!(mask.leading_ones(), len as u32);
            assert_eq!(mask.trailing_zeros(), (MAX_LENGTH - len) as u32);
            assert_eq!(count_set_bits(mask), len);
            assert_eq!(prefix_from_mask(mask).unwrap(), len);
        }
    }

    #[test]
    fn test_table_matches_prefix() {
        for (len, text) in MASKS.iter().enumerate() {
            let mask = address_to_u32(parse_address(text).unwrap());
            assert_eq!(mask, mask_from_prefix(len as u8).unwrap(), "{text}");
            assert_eq!(prefix_from_dotted(text), Some(len as u8));
            assert_eq!(dotted_from_prefix(len as u8), Some(*text));
        }
        assert_eq!(dotted_from_prefix(33), None);
        assert_eq!(prefix_from_dotted("255.255.0.255"), None);
        assert_eq!(prefix_from_dotted("255.255.255.00"), None);
    }

    #[test]
    fn test_is_contiguous_mask() {
        assert!(is_contiguous_mask(0));
        assert!(is_contiguous_mask(u32::MAX));
        assert!(is_contiguous_mask(0xFFFFFF80));
        assert!(!is_contiguous_mask(0xFF00FF00));
        assert!(!is_contiguous_mask(0x00000001));
        assert!(!is_contiguous_mask(0x7FFFFFFF));
        assert!(prefix_from_mask(0xFFFF00FF).is_err());
    }

    #[test]
    fn test_is_valid_host_mask() {
        assert!(is_valid_host_mask(0xFFFFFF00));
        assert!(is_valid_host_mask(0xFFFFFFFC));
        assert!(is_valid_host_mask(0));
        assert!(!is_valid_host_mask(0xFFFFFFFF));
        assert!(!is_valid_host_mask(0xFFFFFFFE));
        assert!(!is_valid_host_mask(0xFFFF0F00));
    }
}
