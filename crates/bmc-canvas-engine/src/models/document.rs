use serde::Serialize;

use super::canonical_key::{CanonicalKey, Region};

/// One headed block of the source document after cleanup.
///
/// A section always holds at least one line; the parser drops headings
/// whose content cleans down to nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Heading text as the author typed it, minus any ordinal prefix
    pub original_title: String,
    pub content: Vec<String>,
}

/// A content line split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine<'a> {
    /// `Label: body` lines, split at the first colon
    Labeled { label: &'a str, body: &'a str },
    Plain(&'a str),
}

impl<'a> ContentLine<'a> {
    pub fn from_line(line: &'a str) -> Self {
        match line.split_once(':') {
            Some((label, body)) => ContentLine::Labeled {
                label,
                body: body.trim(),
            },
            None => ContentLine::Plain(line),
        }
    }
}

impl Section {
    pub fn lines(&self) -> impl Iterator<Item = ContentLine<'_>> {
        self.content.iter().map(|line| ContentLine::from_line(line))
    }
}

/// Parsed planning document: a title plus sections in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    sections: Vec<(CanonicalKey, Section)>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Store a section under `key`.
    ///
    /// A key seen before keeps its position; only its content is replaced.
    pub fn insert(&mut self, key: CanonicalKey, section: Section) {
        match self.sections.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = section,
            None => self.sections.push((key, section)),
        }
    }

    pub fn get(&self, key: &CanonicalKey) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, section)| section)
    }

    pub fn region(&self, region: Region) -> Option<&Section> {
        self.get(&CanonicalKey::Region(region))
    }

    pub fn sections(&self) -> impl Iterator<Item = (&CanonicalKey, &Section)> {
        self.sections.iter().map(|(key, section)| (key, section))
    }

    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.sections.iter().map(|(key, _)| key)
    }

    /// Sections whose headings matched no standard region
    pub fn ad_hoc_sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().filter_map(|(key, section)| match key {
            CanonicalKey::AdHoc(name) => Some((name.as_str(), section)),
            CanonicalKey::Region(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Re-serialize as heading + bullet markdown.
    ///
    /// The title line is always emitted (a bare `#` when the title is empty)
    /// so the first section heading is never mistaken for the title on a
    /// re-parse.
    pub fn to_markdown(&self) -> String {
        let title = format!("# {}", self.title);
        let mut blocks = vec![title.trim_end().to_string()];
        for (_, section) in &self.sections {
            let mut block = format!("## {}", section.original_title);
            for line in &section.content {
                block.push_str("\n- ");
                block.push_str(line);
            }
            blocks.push(block);
        }
        blocks.join("\n\n")
    }
}
