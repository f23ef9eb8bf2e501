//! Tests for document parsing.

use pretty_assertions::assert_eq;

use crate::models::{CanonicalKey, Region};
use crate::parsing::parse_document;

fn content_of(doc: &crate::models::Document, region: Region) -> Vec<&str> {
    doc.region(region)
        .map(|s| s.content.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn acme_example() {
    let md = "# Acme\n## Target Market\n- SMBs\n## Pricing\n- Subscription: $10/mo";

    let doc = parse_document(md);

    assert_eq!(doc.title, "Acme");
    assert_eq!(content_of(&doc, Region::CustomerSegments), vec!["SMBs"]);
    assert_eq!(
        content_of(&doc, Region::RevenueStreams),
        vec!["Subscription: $10/mo"]
    );
    assert_eq!(doc.len(), 2);
}

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert_eq!(doc.title, "");
    assert!(doc.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n   \n");
    assert_eq!(doc.title, "");
    assert!(doc.is_empty());
}

#[test]
fn title_is_first_non_empty_line() {
    let doc = parse_document("\n\n  # My Plan  \n## Channels\n- Web");
    assert_eq!(doc.title, "My Plan");
    assert_eq!(content_of(&doc, Region::Channels), vec!["Web"]);
}

#[test]
fn no_title_when_first_line_is_not_a_heading() {
    let doc = parse_document("Some intro text\n## Channels\n- Web");
    assert_eq!(doc.title, "");
    assert_eq!(content_of(&doc, Region::Channels), vec!["Web"]);
}

#[test]
fn leading_section_heading_is_consumed_as_title() {
    let doc = parse_document("## Channels\n- Web\n## Costs\n- Rent");
    assert_eq!(doc.title, "Channels");
    assert_eq!(doc.region(Region::Channels), None);
    assert_eq!(content_of(&doc, Region::CostStructure), vec!["Rent"]);
}

#[test]
fn lines_before_first_section_are_ignored() {
    let doc = parse_document("# Plan\nintro paragraph\n- stray bullet\n## Channels\n- Web");
    assert_eq!(doc.len(), 1);
    assert_eq!(content_of(&doc, Region::Channels), vec!["Web"]);
}

#[test]
fn empty_sections_are_pruned() {
    let md = "# Plan\n## Channels\n\n## Key Partners\n-\n   \n## Costs\n- Rent";
    let doc = parse_document(md);

    let keys: Vec<_> = doc.keys().map(CanonicalKey::as_str).collect();
    assert_eq!(keys, vec!["costStructure"]);
}

#[test]
fn trailing_empty_section_is_pruned() {
    let doc = parse_document("# Plan\n## Costs\n- Rent\n## Channels");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.region(Region::Channels), None);
}

#[test]
fn repeated_region_overwrites_content_but_keeps_position() {
    let md = "# Plan\n## Channels\n- Web\n## Costs\n- Rent\n## Sales Channels\n- Retail\n- Events";
    let doc = parse_document(md);

    let keys: Vec<_> = doc.keys().map(CanonicalKey::as_str).collect();
    assert_eq!(keys, vec!["channels", "costStructure"]);
    let channels = doc.region(Region::Channels).unwrap();
    assert_eq!(channels.original_title, "Sales Channels");
    assert_eq!(channels.content, vec!["Retail", "Events"]);
}

#[test]
fn unrecognized_heading_is_kept_under_derived_key() {
    let doc = parse_document("# Plan\n### xyz123\n- something");
    let (key, section) = doc.sections().next().unwrap();
    assert_eq!(key, &CanonicalKey::AdHoc("xyz123".to_string()));
    assert_eq!(section.content, vec!["something"]);
}

#[test]
fn windows_line_endings() {
    let doc = parse_document("# Plan\r\n## Channels\r\n- Web\r\n");
    assert_eq!(doc.title, "Plan");
    assert_eq!(content_of(&doc, Region::Channels), vec!["Web"]);
}

#[test]
fn numbered_and_decorated_template_headings() {
    let doc = parse_document(crate::template::TEMPLATE);

    assert_eq!(doc.title, "Your Company Name - Business Model Canvas");
    assert_eq!(doc.len(), 9);
    for region in Region::ALL {
        let section = doc.region(region).unwrap();
        assert_eq!(section.content.len(), 3, "{region:?}");
    }
    assert_eq!(
        doc.region(Region::KeyPartners).unwrap().original_title,
        "Key Partnerships"
    );
}

#[test]
fn reparsing_markdown_output_is_stable() {
    let md = "# Acme 🚀\n\n## 1. Target Market 🎯\n- **SMBs**: 10-50 staff\n* Startups\n\n## Pricing\n1. Subscription: $10/mo\n\n## Team\n- Ann\n## Empty\n";
    let first = parse_document(md);
    let second = parse_document(&first.to_markdown());

    assert_eq!(first, second);
}

#[test]
fn reparsing_untitled_document_is_stable() {
    let first = parse_document("intro\n## Channels\n- Web");
    let second = parse_document(&first.to_markdown());

    assert_eq!(first, second);
}
