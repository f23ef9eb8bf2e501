use crate::models::Region;

/// Recognized heading phrasings, in match priority order.
///
/// Substring matching walks this list front to back and takes the first
/// hit, so an earlier entry wins when a heading contains phrases of two
/// different regions. Entries are normalized text: lowercase, no
/// punctuation, single spaces.
pub const SYNONYMS: &[(&str, Region)] = &[
    ("customer segments", Region::CustomerSegments),
    ("customersegments", Region::CustomerSegments),
    ("target customers", Region::CustomerSegments),
    ("target market", Region::CustomerSegments),
    ("market segments", Region::CustomerSegments),
    ("value propositions", Region::ValuePropositions),
    ("valuepropositions", Region::ValuePropositions),
    ("value proposition", Region::ValuePropositions),
    ("unique value", Region::ValuePropositions),
    ("benefits", Region::ValuePropositions),
    ("channels", Region::Channels),
    ("distribution channels", Region::Channels),
    ("sales channels", Region::Channels),
    ("marketing channels", Region::Channels),
    ("reach customers", Region::Channels),
    ("customer relationships", Region::CustomerRelationships),
    ("customerrelationships", Region::CustomerRelationships),
    ("customer relations", Region::CustomerRelationships),
    ("relationship types", Region::CustomerRelationships),
    ("customer interaction", Region::CustomerRelationships),
    ("revenue streams", Region::RevenueStreams),
    ("revenuestreams", Region::RevenueStreams),
    ("revenue sources", Region::RevenueStreams),
    ("income streams", Region::RevenueStreams),
    ("monetization", Region::RevenueStreams),
    ("pricing", Region::RevenueStreams),
    ("key activities", Region::KeyActivities),
    ("keyactivities", Region::KeyActivities),
    ("core activities", Region::KeyActivities),
    ("main activities", Region::KeyActivities),
    ("business activities", Region::KeyActivities),
    ("key resources", Region::KeyResources),
    ("keyresources", Region::KeyResources),
    ("core resources", Region::KeyResources),
    ("main resources", Region::KeyResources),
    ("essential resources", Region::KeyResources),
    ("assets", Region::KeyResources),
    ("key partnerships", Region::KeyPartners),
    ("keypartnerships", Region::KeyPartners),
    ("key partners", Region::KeyPartners),
    ("keypartners", Region::KeyPartners),
    ("partnerships", Region::KeyPartners),
    ("partners", Region::KeyPartners),
    ("strategic alliances", Region::KeyPartners),
    ("alliances", Region::KeyPartners),
    ("cost structure", Region::CostStructure),
    ("coststructure", Region::CostStructure),
    ("costs", Region::CostStructure),
    ("expenses", Region::CostStructure),
    ("cost breakdown", Region::CostStructure),
    ("operating costs", Region::CostStructure),
];

/// Exact lookup of an already normalized phrase
pub fn exact(text: &str) -> Option<Region> {
    SYNONYMS
        .iter()
        .find(|(phrase, _)| *phrase == text)
        .map(|(_, region)| *region)
}

/// First entry that contains `text` or is contained by it
pub fn overlapping(text: &str) -> Option<Region> {
    if text.is_empty() {
        return None;
    }
    SYNONYMS
        .iter()
        .find(|(phrase, _)| text.contains(phrase) || phrase.contains(text))
        .map(|(_, region)| *region)
}
