//! IPv4 subnet calculator and VLSM allocator.
//!
//! - [`models`] - address codec, mask validation and result types
//! - [`processing`] - network boundary calculation and VLSM allocation
//! - [`output`] - terminal, CSV and JSON rendering
//! - [`cli`] - the command line shell

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{Allocation, NetworkInfo, VlsmSubnet};
pub use processing::{
    allocate_vlsm, compute_network_info, normalize_address, parse_host_demand_list,
    parse_mask_spec,
};
