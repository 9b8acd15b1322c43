//! Output formatting for aggregated IP lists.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - IP list and rejected-entry CSV files
//! - [`terminal`] - Terminal summary with colors

mod csv;
mod terminal;

pub use csv::{
    escape_csv_field, ip_list_csv, rejected_csv, write_csv, IPLIST_HEADER, REJECTED_HEADER,
};
pub use terminal::{format_field, print_summary, summary_lines};
