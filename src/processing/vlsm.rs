//! Variable Length Subnet Mask allocation.
//!
//! Carves a parent block into one subnet per host demand, largest demand
//! first. Each subnet starts where the previous one's broadcast address is;
//! when that broadcast ends in `.255` the next subnet starts one address later.

use crate::error::SubnetError;
use crate::models::{
    address_to_u32, parse_address, u32_to_address, Allocation, VlsmSubnet, MAX_LENGTH,
};
use crate::processing::normalize_address;

/// Shortest parent prefix accepted for VLSM.
pub const MIN_PARENT_PREFIX: u8 = 8;
/// Longest parent prefix accepted for VLSM.
pub const MAX_PARENT_PREFIX: u8 = 30;

/// Return an error if the parent prefix is outside 8-30.
pub fn check_parent_prefix(parent_prefix: u8) -> Result<(), SubnetError> {
    if (MIN_PARENT_PREFIX..=MAX_PARENT_PREFIX).contains(&parent_prefix) {
        Ok(())
    } else {
        Err(SubnetError::InvalidPrefixRange(parent_prefix))
    }
}

/// Smallest block, network and broadcast included, that holds `demand` hosts.
///
/// Doubles from 2 until `block - 2 >= demand`, so a demand of 0 gives 2.
pub fn block_size_for(demand: u32) -> u64 {
    let mut block: u64 = 2;
    while block - 2 < demand as u64 {
        block *= 2;
    }
    block
}

/// Prefix length of a power-of-two block, `None` if larger than the address space.
pub fn prefix_for_block(block: u64) -> Option<u8> {
    MAX_LENGTH.checked_sub(block.trailing_zeros() as u8)
}

/// Addresses in a block with the given prefix length.
fn parent_block_size(parent_prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - parent_prefix.min(MAX_LENGTH))
}

/// Number of leading demands whose blocks fit in the parent together.
///
/// Walks the demands in the given order and stops at the first one whose
/// block would push the running total past the parent's address count.
pub fn fitting_demand_count(demands: &[u32], parent_prefix: u8) -> usize {
    let capacity = parent_block_size(parent_prefix);
    let mut used: u64 = 0;
    let mut count = 0;
    for &demand in demands {
        let block = block_size_for(demand);
        if used + block > capacity {
            break;
        }
        used += block;
        count += 1;
    }
    count
}

/// Allocate one subnet per demand inside `base_address`/`parent_prefix`.
///
/// # Arguments
/// * `base_address` - Start of the parent block, any form [`normalize_address`] accepts
/// * `parent_prefix` - Prefix length of the parent block, 8-30
/// * `demands` - Usable hosts wanted per subnet, already sorted largest first
///
/// # Returns
/// One [`Allocation`] per demand that fits the parent. Demands past the
/// capacity of the parent are left out. An invalid parent prefix or base
/// address gives [`Allocation::Error`] for every demand.
pub fn allocate_vlsm(base_address: &str, parent_prefix: u8, demands: &[u32]) -> Vec<Allocation> {
    if let Err(e) = check_parent_prefix(parent_prefix) {
        log::debug!("allocate_vlsm: {e}");
        return error_run(demands);
    }
    let base = match normalize_address(base_address).and_then(|text| parse_address(&text)) {
        Ok(addr) => addr,
        Err(e) => {
            log::debug!("allocate_vlsm: {e}");
            return error_run(demands);
        }
    };

    let fitting = fitting_demand_count(demands, parent_prefix);
    if fitting < demands.len() {
        log::debug!(
            "allocate_vlsm: {} of {} demands exceed /{parent_prefix}",
            demands.len() - fitting,
            demands.len()
        );
    }

    let (allocations, _cursor) = demands[..fitting].iter().fold(
        (Vec::with_capacity(fitting), address_to_u32(base)),
        |(mut allocations, cursor), &demand| {
            let allocation = allocate_one(cursor, parent_prefix, demand);
            // Sentinels leave the cursor where it was.
            let cursor = allocation
                .subnet()
                .map(|subnet| address_to_u32(subnet.broadcast))
                .unwrap_or(cursor);
            allocations.push(allocation);
            (allocations, cursor)
        },
    );
    allocations
}

fn error_run(demands: &[u32]) -> Vec<Allocation> {
    demands
        .iter()
        .map(|&requested_hosts| Allocation::Error { requested_hosts })
        .collect()
}

/// Place a single subnet starting at `start`.
fn allocate_one(start: u32, parent_prefix: u8, demand: u32) -> Allocation {
    let overflow = Allocation::Overflow {
        requested_hosts: demand,
    };
    let block = block_size_for(demand);
    let prefix_length = match prefix_for_block(block) {
        Some(len)
            if demand > 0 && len >= parent_prefix && block <= parent_block_size(parent_prefix) =>
        {
            len
        }
        _ => {
            log::trace!("allocate_one: demand {demand} (block {block}) overflows /{parent_prefix}");
            return overflow;
        }
    };

    // A start on .255 rolls over into the next octet.
    let network = if start & 0xFF == 0xFF {
        start.checked_add(1)
    } else {
        Some(start)
    };
    let Some((network, broadcast)) =
        network.and_then(|network| Some((network, network.checked_add((block - 1) as u32)?)))
    else {
        log::trace!("allocate_one: demand {demand} runs past 255.255.255.255");
        return overflow;
    };

    log::trace!(
        "allocate_one: demand {demand} -> {}/{prefix_length}",
        u32_to_address(network)
    );
    Allocation::Allocated(VlsmSubnet {
        network: u32_to_address(network),
        prefix_length,
        first_host: u32_to_address(network + 1),
        last_host: u32_to_address(broadcast - 1),
        broadcast: u32_to_address(broadcast),
        requested_hosts: demand,
    })
}
