//! CSV output for aggregated IP lists.

use crate::models::{BlockSet, RejectedEntry};
use std::error::Error;
use std::path::Path;

/// Header of the IP list import file.
pub const IPLIST_HEADER: &str = "name,description,include";

/// Header of the rejected entries file.
pub const REJECTED_HEADER: &str = "raw,reason";

/// Build the IP list CSV: one row per block, name and description repeated.
pub fn ip_list_csv(name: &str, description: &str, blocks: &BlockSet) -> String {
    let name = escape_csv_field(name);
    let description = escape_csv_field(description);

    let mut out = String::from(IPLIST_HEADER);
    out.push('\n');
    for block in blocks {
        out.push_str(&format!("{name},{description},{block}\n"));
    }
    out
}

/// Build the rejected entries CSV.
pub fn rejected_csv(rejected: &[RejectedEntry]) -> String {
    let mut out = String::from(REJECTED_HEADER);
    out.push('\n');
    for entry in rejected {
        out.push_str(&format!(
            "{},{}\n",
            escape_csv_field(&entry.raw),
            entry.reason.code()
        ));
    }
    out
}

/// Write CSV contents to `path`.
pub fn write_csv(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    std::fs::write(path, contents)
        .map_err(|e| format!("Error writing CSV file {}: {e}", path.display()))?;
    log::info!(
        "Wrote {} rows to {}",
        contents.lines().count().saturating_sub(1),
        path.display()
    );
    Ok(())
}

/// Quote a field if it holds a comma, quote, or line break; inner quotes are doubled.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains([',', '"', '\n', '\r']) {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
