//! Constants shared by the feed reader and CLI.

/// Timezone used for dated cache and output file names when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Pacific/Auckland";

/// IP list name written to the CSV when none is configured.
pub const DEFAULT_IPLIST_NAME: &str = "cloud";

/// HTTP timeout for fetching a feed.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Largest feed body accepted, local or remote.
pub const MAX_FEED_BYTES: usize = 20_000_000;

/// Prefix of daily feed cache files.
pub const FEED_CACHE_PREFIX: &str = "feed_cache";

/// Prefix of default output files.
pub const OUTPUT_PREFIX: &str = "iplist";
