//! Feed retrieval from a local file or an http(s) URL, with a daily cache.

use crate::config;
use chrono_tz::Tz;
use reqwest::Url;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// True if `source` should be fetched over HTTP.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read a feed body from a file path or URL.
///
/// # Arguments
/// * `source` - Local path or http(s) URL
/// * `cache_dir` - If set, URL bodies are cached there once per day
/// * `tz` - Timezone deciding the cache file date
pub async fn read_feed(
    source: &str,
    cache_dir: Option<&Path>,
    tz: Tz,
) -> Result<String, Box<dyn Error>> {
    if !is_url(source) {
        return read_feed_file(Path::new(source));
    }

    let cache_file = match cache_dir {
        Some(dir) => Some(cache_file_path(dir, source, tz)?),
        None => None,
    };

    if let Some(cache_file) = &cache_file {
        if cache_file.exists() {
            log::info!("Reading feed from cache file: {}", cache_file.display());
            return read_feed_file(cache_file);
        }
        log::warn!("Cache file not found: {}", cache_file.display());
    }

    let body = fetch_feed(source).await?;

    if let Some(cache_file) = &cache_file {
        log::warn!("Writing feed to cache file: {}", cache_file.display());
        std::fs::write(cache_file, &body)
            .map_err(|e| format!("Error writing cache file {}: {e}", cache_file.display()))?;
    }

    Ok(body)
}

/// Read a local feed file, enforcing [`config::MAX_FEED_BYTES`].
pub fn read_feed_file(path: &Path) -> Result<String, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Feed file does not exist: {}", path.display()).into());
    }
    let len = std::fs::metadata(path)
        .map_err(|e| format!("Error reading feed file metadata {}: {e}", path.display()))?
        .len();
    check_size(len as usize, &path.display().to_string())?;
    let body = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading feed file {}: {e}", path.display()))?;
    log::info!("Read {} bytes from {}", body.len(), path.display());
    Ok(body)
}

/// GET the feed body.
pub async fn fetch_feed(url: &str) -> Result<String, Box<dyn Error>> {
    log::info!("Fetching feed {url}");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Error fetching {url}: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Error status from {url}: {e}"))?;

    if let Some(len) = response.content_length() {
        check_size(len as usize, url)?;
    }
    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading body from {url}: {e}"))?;
    check_size(body.len(), url)?;

    log::info!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// `<dir>/feed_cache_<key>_<YYYY-MM-DD>.txt`, dated in `tz`.
///
/// The key is built from the host, port, path, and query of `url`, so every
/// distinct feed gets its own file.
pub fn cache_file_path(dir: &Path, url: &str, tz: Tz) -> Result<PathBuf, Box<dyn Error>> {
    let url = Url::parse(url).map_err(|e| format!("Invalid feed URL {url}: {e}"))?;
    let host = url
        .host_str()
        .ok_or_else(|| format!("Feed URL has no host: {url}"))?;

    let mut key = host.to_string();
    if let Some(port) = url.port() {
        key.push_str(&format!(":{port}"));
    }
    key.push_str(url.path());
    if let Some(query) = url.query() {
        key.push('?');
        key.push_str(query);
    }

    let now = chrono::Utc::now().with_timezone(&tz);
    Ok(dir.join(format!(
        "{}_{}_{}.txt",
        config::FEED_CACHE_PREFIX,
        cache_key(&key),
        now.format("%Y-%m-%d")
    )))
}

/// File-name safe encoding: `[A-Za-z0-9.-]` kept, any other byte written as `_XX`.
fn cache_key(raw: &str) -> String {
    raw.bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'.' || b == b'-' {
                (b as char).to_string()
            } else {
                format!("_{b:02X}")
            }
        })
        .collect()
}

fn check_size(len: usize, source: &str) -> Result<(), Box<dyn Error>> {
    if len > config::MAX_FEED_BYTES {
        return Err(format!(
            "Feed too large: {len} bytes from {source} (limit {})",
            config::MAX_FEED_BYTES
        )
        .into());
    }
    Ok(())
}
