//! CSV output formatting for VLSM plans.

use crate::models::{format_address, Allocation};

use super::terminal::format_field;

/// Header line matching [`allocation_csv_row`].
pub const CSV_HEADER: &str = r#"   "cnt",      "status",          "network", "mask",      "first_host",       "last_host",       "broadcast", "wanted_hosts""#;

/// Format one allocation as a CSV row, sentinels repeat their status in every address column.
pub fn allocation_csv_row(index: usize, allocation: &Allocation) -> String {
    let (network, mask, first_host, last_host, broadcast) = match allocation.subnet() {
        Some(subnet) => (
            format_address(subnet.network),
            subnet.prefix_length,
            format_address(subnet.first_host),
            format_address(subnet.last_host),
            format_address(subnet.broadcast),
        ),
        None => {
            let status = allocation.status().to_string();
            (status.clone(), 0, status.clone(), status.clone(), status)
        }
    };

    format!(
        r#"{cnt},{status},{network},{mask},{first_host},{last_host},{broadcast},{wanted}"#,
        cnt = format_field(index + 1, 8),
        status = format_field(allocation.status(), 13),
        network = format_field(network, 17),
        mask = format_field(mask, 6),
        first_host = format_field(first_host, 17),
        last_host = format_field(last_host, 17),
        broadcast = format_field(broadcast, 17),
        wanted = format_field(allocation.requested_hosts(), 15),
    )
}

/// Print a VLSM plan as CSV to stdout.
pub fn allocations_print_csv(plan: &[Allocation]) {
    log::info!("#Start allocations_print_csv() rows = {}", plan.len());
    println!("{CSV_HEADER}");
    for (i, allocation) in plan.iter().enumerate() {
        println!("{}", allocation_csv_row(i, allocation));
    }
}
