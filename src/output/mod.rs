//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output of VLSM plans
//! - [`terminal`] - Labelled terminal reports with colors
//! - [`json`] - JSON rendering

mod csv;
mod json;
mod terminal;

pub use csv::{allocation_csv_row, allocations_print_csv, CSV_HEADER};
pub use json::to_json;
pub use terminal::{allocation_report, format_field, network_info_report};
