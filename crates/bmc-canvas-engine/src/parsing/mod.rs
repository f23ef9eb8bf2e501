pub mod content;
pub mod heading;
pub mod synonyms;

#[cfg(test)]
mod tests;

use crate::models::{CanonicalKey, Document, Section};

pub use content::clean_content_line;
pub use heading::{HeadingMatch, normalize_heading};

/// Section being accumulated while scanning
struct OpenSection {
    key: CanonicalKey,
    original_title: String,
    content: Vec<String>,
}

impl OpenSection {
    fn flush_into(self, doc: &mut Document) {
        if self.content.is_empty() {
            log::debug!("dropping empty section {:?}", self.original_title);
            return;
        }
        doc.insert(
            self.key,
            Section {
                original_title: self.original_title,
                content: self.content,
            },
        );
    }
}

/// Parse a heading/bullet planning document. Never fails.
///
/// The first non-empty line is the title when it starts with `#`. Every
/// later heading opens a section; body lines before the first section
/// heading are ignored, and sections with no surviving lines are dropped.
pub fn parse_document(text: &str) -> Document {
    let mut lines = text.lines().map(str::trim).peekable();
    while lines.next_if(|line| line.is_empty()).is_some() {}

    let mut doc = Document::default();
    if let Some(first) = lines.next_if(|line| line.starts_with('#')) {
        doc.title = first.trim_start_matches('#').trim().to_string();
    }

    let mut open: Option<OpenSection> = None;
    for line in lines.filter(|line| !line.is_empty()) {
        if heading::heading_text(line).is_some() {
            if let Some(section) = open.take() {
                section.flush_into(&mut doc);
            }
            let HeadingMatch {
                key,
                original_title,
            } = normalize_heading(line);
            open = Some(OpenSection {
                key,
                original_title,
                content: Vec::new(),
            });
        } else if let Some(section) = open.as_mut()
            && let Some(cleaned) = clean_content_line(line)
        {
            section.content.push(cleaned);
        }
    }
    if let Some(section) = open.take() {
        section.flush_into(&mut doc);
    }

    log::debug!(
        "parsed document {:?} with {} sections",
        doc.title,
        doc.len()
    );
    doc
}
