//! Feed body parsing.
//!
//! A feed is either a JSON array of strings or plain text with entries
//! separated by commas, semicolons, or whitespace.

use regex::Regex;
use std::error::Error;
use std::sync::OnceLock;

/// Regex for splitting plain-text feeds into entries.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,;\s]+").expect("Invalid Regex"))
}

/// Split a feed body into raw entries.
///
/// # Returns
/// * `Ok(Vec<String>)` - Entries in feed order
/// * `Err` - If the body looks like JSON but is not an array of strings
pub fn parse_feed(body: &str) -> Result<Vec<String>, Box<dyn Error>> {
    if body.trim_start().starts_with('[') {
        parse_json_feed(body)
    } else {
        Ok(parse_text_feed(body))
    }
}

fn parse_json_feed(body: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let entries: Vec<String> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing JSON feed: path={} error={}", e.path(), e))?;
    log::debug!("Parsed {} entries from JSON feed", entries.len());
    Ok(entries)
}

/// `#` starts a comment running to the end of the line.
fn parse_text_feed(body: &str) -> Vec<String> {
    let entries: Vec<String> = body
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .flat_map(|line| get_separator_regex().split(line))
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();
    log::debug!("Parsed {} entries from text feed", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_feed() {
        let body = "# vendor ranges\n10.0.0.0/24, 10.0.1.0/24\n\n  192.168.1.5 ;172.16.0.0/12 # office\n";
        assert_eq!(
            parse_feed(body).unwrap(),
            vec!["10.0.0.0/24", "10.0.1.0/24", "192.168.1.5", "172.16.0.0/12"]
        );
    }

    #[test]
    fn test_text_feed_keeps_bad_entries() {
        let body = "300.1.1.1/24\n2001:db8::/32\n10.0.0.1-10.0.0.9";
        assert_eq!(
            parse_feed(body).unwrap(),
            vec!["300.1.1.1/24", "2001:db8::/32", "10.0.0.1-10.0.0.9"]
        );
    }

    #[test]
    fn test_json_feed() {
        let body = r#"  ["10.0.0.0/24", "2001:db8::/32"]"#;
        assert_eq!(
            parse_feed(body).unwrap(),
            vec!["10.0.0.0/24", "2001:db8::/32"]
        );
    }

    #[test]
    fn test_json_feed_reports_path() {
        let err = parse_feed(r#"["10.0.0.0/24", 42]"#).unwrap_err();
        assert!(err.to_string().contains("path=[1]"), "got: {err}");
    }

    #[test]
    fn test_empty_feed() {
        assert!(parse_feed("").unwrap().is_empty());
        assert!(parse_feed("# nothing\n\n").unwrap().is_empty());
    }
}
