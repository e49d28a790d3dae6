//! Error type shared by the address, mask and allocation code.

use thiserror::Error;

/// Errors returned by the subnet calculator.
///
/// Capacity overflow during VLSM allocation is not an error; it is reported
/// per entry as [`crate::models::Allocation::Overflow`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Malformed dotted-decimal text (octet count, empty or out of range octet).
    #[error("Invalid address format: {0}")]
    Format(String),

    /// Non-contiguous mask, a /31 or /32 used as host mask, or unknown mask text.
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),

    /// VLSM parent prefix outside 8-30.
    #[error("Invalid prefix length: /{0} (must be 8-30)")]
    InvalidPrefixRange(u8),

    /// Base address that could not be normalised.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Host demand list with a token that is not a non-negative integer.
    #[error("Invalid input for host requirements: {0}")]
    InvalidInput(String),
}
