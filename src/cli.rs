//! Command line arguments and the top-level run.

use crate::config;
use crate::feed::{parse_feed, read_feed};
use crate::output::{ip_list_csv, print_summary, rejected_csv, write_csv};
use crate::processing::{aggregate, expand_ranges};
use chrono_tz::Tz;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Aggregate a cloud vendor's published IPv4 ranges into a PCE IP list CSV.
#[derive(Parser, Debug)]
#[command(name = "cloud-iplist-aggregate")]
#[command(author, version, about)]
pub struct Cli {
    /// Feed to read: local file path or http(s) URL
    #[arg(short, long, env = "IPLIST_SOURCE")]
    pub source: String,

    /// Output CSV path [default: iplist_<name>_<date>.csv]
    #[arg(short, long, env = "IPLIST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// IP list name written to the CSV
    #[arg(short, long, env = "IPLIST_NAME", default_value = config::DEFAULT_IPLIST_NAME)]
    pub name: String,

    /// IP list description written to the CSV
    #[arg(short, long, env = "IPLIST_DESCRIPTION", default_value = "")]
    pub description: String,

    /// Also write rejected entries to this CSV
    #[arg(long, env = "IPLIST_REJECTED_OUTPUT")]
    pub rejected_output: Option<PathBuf>,

    /// Expand a.b.c.d-e.f.g.h ranges into CIDRs before aggregating
    #[arg(long, env = "IPLIST_EXPAND_RANGES")]
    pub expand_ranges: bool,

    /// Directory for the daily cache of fetched feeds
    #[arg(long, env = "IPLIST_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// IANA timezone for dated file names
    #[arg(long, env = "IPLIST_TIMEZONE", default_value = config::DEFAULT_TIMEZONE)]
    pub timezone: String,
}

impl Cli {
    /// Parsed [`Cli::timezone`].
    pub fn tz(&self) -> Result<Tz, Box<dyn Error>> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| format!("Invalid timezone {}: {e}", self.timezone).into())
    }

    /// [`Cli::output`], or `iplist_<name>_<YYYY-MM-DD>.csv` dated in `tz`.
    pub fn output_path(&self, tz: Tz) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let now = chrono::Utc::now().with_timezone(&tz);
            let name: String = self
                .name
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
                .collect();
            PathBuf::from(format!(
                "{}_{name}_{}.csv",
                config::OUTPUT_PREFIX,
                now.format("%Y-%m-%d")
            ))
        })
    }
}

/// Read the feed, aggregate it, and write the CSV output.
pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let tz = cli.tz()?;
    log::info!("#Start run() source={}", cli.source);

    let body = read_feed(&cli.source, cli.cache_dir.as_deref(), tz).await?;
    let mut entries = parse_feed(&body)?;
    let input_count = entries.len();

    if cli.expand_ranges {
        entries = expand_ranges(&entries);
        log::info!(
            "Expanded ranges: {} entries => {}",
            input_count,
            entries.len()
        );
    }

    let result = aggregate(&entries);

    let output = cli.output_path(tz);
    write_csv(&output, &ip_list_csv(&cli.name, &cli.description, &result.blocks))?;

    if let Some(rejected_output) = &cli.rejected_output {
        write_csv(rejected_output, &rejected_csv(&result.rejected))?;
    }

    print_summary(&cli.source, input_count, &result);
    log::info!("#End run() wrote {}", output.display());
    Ok(())
}
