use std::sync::OnceLock;

use regex::Regex;

use super::heading::strip_ordinal;

fn bullet_regex() -> &'static Regex {
    static BULLET: OnceLock<Regex> = OnceLock::new();
    BULLET.get_or_init(|| Regex::new(r"^[•\-*]\s*").expect("Invalid bullet regex"))
}

fn label_regex() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"^\*+([^*]+)\*+:?\s*").expect("Invalid label regex"))
}

/// Clean one body line of a section.
///
/// Strips a single bullet marker and an ordinal prefix, and rewrites an
/// emphasized lead-in (`**Label**: rest`, `*Label* rest`) as `Label: rest`.
/// Returns `None` when nothing is left.
pub fn clean_content_line(line: &str) -> Option<String> {
    let line = bullet_regex().replace(line.trim(), "");
    let line = strip_ordinal(&line);
    let line = label_regex().replace(&line, "${1}: ");
    let cleaned = line.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
