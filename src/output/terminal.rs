//! Terminal output utilities.
//!
//! Provides formatting helpers and the run summary.

use crate::processing::Aggregation;
use colored::Colorize;

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

/// Summary lines for a finished aggregation, without colour.
pub fn summary_lines(source: &str, input_count: usize, result: &Aggregation) -> Vec<String> {
    let mut lines = vec![
        format!("source:      {source}"),
        format!(
            "entries:     {} read, {} unique, {} rejected",
            input_count,
            result.normalized_count,
            result.rejected.len()
        ),
        format!(
            "subsets:     {} removed",
            result.normalized_count - result.subset_free_count
        ),
        format!(
            "merged:      {} => {} blocks in {} pass(es)",
            result.subset_free_count,
            result.blocks.len(),
            result.passes
        ),
        format!("addresses:   {}", result.blocks.address_count()),
    ];
    lines.extend(result.rejected.iter().map(|entry| {
        format!(
            "rejected:    {} {}",
            format_field(&entry.raw, 20),
            entry.reason
        )
    }));
    lines
}

/// Print the summary to stdout, highlighting rejections.
pub fn print_summary(source: &str, input_count: usize, result: &Aggregation) {
    for line in summary_lines(source, input_count, result) {
        if line.starts_with("rejected:") {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }
    if result.rejected.is_empty() {
        println!("{}", "OK".on_green());
    } else {
        println!(
            "{} {} entries rejected",
            "WARN".on_red(),
            result.rejected.len()
        );
    }
}
