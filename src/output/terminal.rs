//! Terminal output utilities.
//!
//! Provides formatting helpers and the labelled reports printed by the binary.

use crate::models::{format_address, Allocation, NetworkInfo};
use colored::Colorize;

const RULE: &str = "----------------------";

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Labelled report of a single network calculation.
pub fn network_info_report(info: &NetworkInfo) -> String {
    let lines = [
        format!("{}", "Calculation Results:".cyan()),
        RULE.to_string(),
        format!("Network Address: {}", format_address(info.network_address)),
        format!("Broadcast Address: {}", format_address(info.broadcast_address)),
        format!(
            "First Usable Address: {}",
            format_address(info.first_usable_address)
        ),
        format!(
            "Last Usable Address: {}",
            format_address(info.last_usable_address)
        ),
        format!("Total Hosts: {}", info.total_hosts),
        RULE.to_string(),
    ];
    lines.join("\n")
}

/// Labelled report of a VLSM plan, one block per allocation.
pub fn allocation_report(plan: &[Allocation]) -> String {
    let mut lines = Vec::new();
    for allocation in plan {
        lines.push("-------------------".to_string());
        match allocation {
            Allocation::Allocated(subnet) => {
                lines.push(format!("Network: {}", format_address(subnet.network)));
                lines.push(format!("Mask: {}", subnet.prefix_length));
                lines.push(format!("First Host: {}", format_address(subnet.first_host)));
                lines.push(format!("Last Host: {}", format_address(subnet.last_host)));
                lines.push(format!("Broadcast: {}", format_address(subnet.broadcast)));
            }
            Allocation::Overflow { .. } | Allocation::Error { .. } => {
                let status = allocation.status().red();
                lines.push(format!("Network: {status}"));
                lines.push("Mask: 0".to_string());
                lines.push(format!("First Host: {status}"));
                lines.push(format!("Last Host: {status}"));
                lines.push(format!("Broadcast: {status}"));
            }
        }
        lines.push(format!("Wanted host: {}", allocation.requested_hosts()));
    }
    lines.join("\n")
}
