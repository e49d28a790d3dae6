//! Subnet calculations.
//!
//! - [`network_info`] - Network boundaries for an address/mask pair
//! - [`input`] - Normalisation of address, mask and host list text
//! - [`vlsm`] - VLSM allocation of host demands inside a parent block

mod input;
mod network_info;
mod vlsm;

// Re-export public functions
pub use input::{normalize_address, parse_host_demand_list, parse_mask_spec};
pub use network_info::compute_network_info;
pub use vlsm::{
    allocate_vlsm, block_size_for, check_parent_prefix, fitting_demand_count, prefix_for_block,
    MAX_PARENT_PREFIX, MIN_PARENT_PREFIX,
};
