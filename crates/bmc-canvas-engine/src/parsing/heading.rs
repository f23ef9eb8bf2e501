use std::sync::OnceLock;

use regex::Regex;

use super::synonyms;
use crate::models::CanonicalKey;

/// Key used when a heading normalizes to nothing at all (e.g. `## 42`).
pub const UNTITLED_KEY: &str = "untitled";

/// Result of normalizing one heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    pub key: CanonicalKey,
    /// Author's heading text with markers, decoration and ordinal removed
    pub original_title: String,
}

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    // Trailing pictographs, ZWJ sequences and variation selectors are decoration.
    HEADING.get_or_init(|| {
        Regex::new(
            r"^#+\s*(.+?)(?:\s*[\x{1F000}-\x{1FAFF}\x{2600}-\x{27BF}\x{2B00}-\x{2BFF}\x{FE0F}\x{200D}]+)?$",
        )
        .expect("Invalid heading regex")
    })
}

fn ordinal_regex() -> &'static Regex {
    static ORDINAL: OnceLock<Regex> = OnceLock::new();
    ORDINAL.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("Invalid ordinal regex"))
}

pub(crate) fn strip_ordinal(text: &str) -> std::borrow::Cow<'_, str> {
    ordinal_regex().replace(text, "")
}

/// Returns the heading text of a trimmed line, or `None` for non-heading lines.
pub fn heading_text(line: &str) -> Option<&str> {
    heading_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lowercase, drop punctuation and symbols, collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a raw heading line to its canonical key. Never fails.
///
/// Lookup order: exact synonym, exact synonym with spaces removed, first
/// synonym overlapping the text, then a key derived from the text itself.
pub fn normalize_heading(raw: &str) -> HeadingMatch {
    let raw = raw.trim();
    let text = heading_text(raw).unwrap_or_else(|| raw.trim_start_matches('#').trim());
    let original_title = strip_ordinal(text).trim().to_string();
    let normalized = normalize_text(&original_title);
    let collapsed: String = normalized.split(' ').collect();

    let key = synonyms::exact(&normalized)
        .or_else(|| synonyms::exact(&collapsed))
        .or_else(|| synonyms::overlapping(&normalized))
        .map(CanonicalKey::Region)
        .unwrap_or_else(|| derive_key(&collapsed));

    log::debug!("heading {raw:?} -> {key}");
    HeadingMatch {
        key,
        original_title,
    }
}

fn derive_key(collapsed: &str) -> CanonicalKey {
    let derived = collapsed.trim_start_matches(|c: char| c.is_ascii_digit());
    if derived.is_empty() {
        CanonicalKey::AdHoc(UNTITLED_KEY.to_string())
    } else {
        CanonicalKey::AdHoc(derived.to_string())
    }
}
