//! Network boundaries for a single address/mask pair.

use crate::error::SubnetError;
use crate::models::{
    address_to_u32, broadcast_addr, count_set_bits, cut_addr, is_valid_host_mask, parse_address,
    u32_to_address, NetworkInfo, MAX_LENGTH,
};

/// Calculate network, broadcast, usable range and host count.
///
/// # Arguments
/// * `address_text` - Dotted-decimal host address, e.g. `192.168.1.10`
/// * `mask_text` - Dotted-decimal subnet mask, e.g. `255.255.255.0`
///
/// # Returns
/// * `Err(SubnetError::Format)` - If either text is not a dotted-decimal address
/// * `Err(SubnetError::InvalidMask)` - If the mask is not contiguous or is /31 or /32
///
/// # Examples
/// ```
/// use subnet_vlsm::processing::compute_network_info;
/// let info = compute_network_info("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(info.network_address.to_string(), "192.168.1.0");
/// assert_eq!(info.total_hosts, 254);
/// ```
pub fn compute_network_info(
    address_text: &str,
    mask_text: &str,
) -> Result<NetworkInfo, SubnetError> {
    let ip = parse_address(address_text)?;
    let mask = address_to_u32(parse_address(mask_text)?);
    if !is_valid_host_mask(mask) {
        return Err(SubnetError::InvalidMask(format!(
            "{} is not a valid host mask",
            mask_text.trim()
        )));
    }

    let prefix_length = count_set_bits(mask);
    // A contiguous mask is fully described by its prefix length.
    let network = address_to_u32(cut_addr(ip, prefix_length)?);
    let broadcast = address_to_u32(broadcast_addr(ip, prefix_length)?);
    let host_bits = MAX_LENGTH - prefix_length;
    let total_hosts = (1u64 << host_bits) - 2;
    log::trace!("compute_network_info({address_text}, {mask_text}) host_bits={host_bits}");

    Ok(NetworkInfo {
        network_address: u32_to_address(network),
        broadcast_address: u32_to_address(broadcast),
        first_usable_address: u32_to_address(network + 1),
        last_usable_address: u32_to_address(broadcast - 1),
        total_hosts,
        prefix_length,
        subnet_mask: u32_to_address(mask),
    })
}
