//! Trunk VLAN range normalization.
//!
//! Turns the text after `port trunk allow-pass vlan` (possibly several
//! lines joined with spaces) into an [`AllowedVlans`] set.

use crate::models::AllowedVlans;
use regex::Regex;
use std::sync::OnceLock;

/// Keyword joining the two ends of a range.
const RANGE_KEYWORD: &str = "to";

static STRIP_REGEX: OnceLock<Regex> = OnceLock::new();
static SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches every char that is not a digit, `t`, `o`, comma or whitespace.
fn get_strip_regex() -> &'static Regex {
    STRIP_REGEX.get_or_init(|| Regex::new(r"[^0-9to,\s]").expect("Invalid Regex"))
}

/// A comma, a whitespace run, or both act as one separator.
fn get_split_regex() -> &'static Regex {
    SPLIT_REGEX.get_or_init(|| Regex::new(r",\s*|\s+").expect("Invalid Regex"))
}

fn is_vlan_id(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Normalize raw trunk declaration text into a set of VLAN tokens.
///
/// * `"10 to 15, 20"` gives `{"10 to 15", "20"}`
/// * `"10, 10, 11"` gives `{"10", "11"}`
///
/// Malformed input never fails: a `to` without a numeric neighbour on
/// both sides is dropped, and so are its neighbours.
pub fn normalize_vlans(raw: &str) -> AllowedVlans {
    let cleaned = get_strip_regex().replace_all(raw, "");
    let tokens: Vec<&str> = get_split_regex()
        .split(cleaned.trim())
        .filter(|t| !t.is_empty())
        .collect();
    log::trace!("normalize_vlans raw={raw:?} tokens={tokens:?}");

    let mut vlans = AllowedVlans::new();
    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| tokens.get(p)).copied();
        let next = tokens.get(i + 1).copied();

        if *token == RANGE_KEYWORD {
            match (prev, next) {
                (Some(lo), Some(hi)) if is_vlan_id(lo) && is_vlan_id(hi) => {
                    vlans.insert(format!("{lo} {RANGE_KEYWORD} {hi}"));
                }
                _ => log::debug!("Ignoring dangling '{RANGE_KEYWORD}' in trunk vlans: {raw:?}"),
            }
        } else if is_vlan_id(token)
            && prev != Some(RANGE_KEYWORD)
            && next != Some(RANGE_KEYWORD)
        {
            vlans.insert(*token);
        }
    }
    vlans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_single() {
        let vlans = normalize_vlans("10 to 15, 20");
        assert!(vlans.contains("10 to 15"));
        assert!(vlans.contains("20"));
        assert_eq!(vlans.len(), 2, "Range ends must not show up as single ids");
        assert_eq!(vlans.to_string(), "10 to 15, 20");
    }

    #[test]
    fn test_deduplicate() {
        assert_eq!(normalize_vlans("10, 10, 11").to_string(), "10, 11");
    }

    #[test]
    fn test_whitespace_only_separators() {
        assert_eq!(normalize_vlans("10 to 12 20").to_string(), "10 to 12, 20");
    }

    #[test]
    fn test_multiple_ranges() {
        assert_eq!(
            normalize_vlans("100 to 110 200 to 210 300").to_string(),
            "100 to 110, 200 to 210, 300"
        );
    }

    #[test]
    fn test_strips_noise() {
        // Continuation markers and control chars are dropped before splitting
        assert_eq!(normalize_vlans("10\r\n 20 \\ 30#").to_string(), "10, 20, 30");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_vlans("").is_empty());
        assert!(normalize_vlans("   , ,").is_empty());
    }

    #[test]
    fn test_dangling_to_at_start() {
        assert_eq!(normalize_vlans("to 5, 7").to_string(), "7");
    }

    #[test]
    fn test_dangling_to_at_end() {
        assert_eq!(normalize_vlans("3 5 to").to_string(), "3");
    }

    #[test]
    fn test_lone_to() {
        assert!(normalize_vlans("to").is_empty());
    }

    #[test]
    fn test_comma_inside_range() {
        assert_eq!(normalize_vlans("10 to, 15").to_string(), "10 to 15");
    }
}
