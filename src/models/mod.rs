//! Value types of the subnet calculator.
//!
//! - [`ipv4`] - dotted-decimal codec and address arithmetic
//! - [`mask`] - subnet mask validation and prefix conversions
//! - [`NetworkInfo`] - result of a single address/mask calculation
//! - [`Allocation`] and [`VlsmSubnet`] - VLSM plan entries

mod ipv4;
mod mask;
mod network_info;
mod subnet;

// Re-export public types
pub use ipv4::{
    address_to_u32, broadcast_addr, cut_addr, format_address, parse_address, u32_to_address, Ipv4,
};
pub use mask::{
    count_set_bits, dotted_from_prefix, is_contiguous_mask, is_valid_host_mask, mask_from_prefix,
    prefix_from_dotted, prefix_from_mask, MASKS, MAX_LENGTH,
};
pub use network_info::NetworkInfo;
pub use subnet::{Allocation, VlsmSubnet};
