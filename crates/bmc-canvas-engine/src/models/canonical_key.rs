use std::fmt;

use serde::{Serialize, Serializer};

/// The nine standard regions of a business model canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CustomerSegments,
    ValuePropositions,
    Channels,
    CustomerRelationships,
    RevenueStreams,
    KeyActivities,
    KeyResources,
    KeyPartners,
    CostStructure,
}

impl Region {
    /// All regions in the order the canvas paints them
    pub const ALL: [Region; 9] = [
        Region::KeyPartners,
        Region::KeyActivities,
        Region::ValuePropositions,
        Region::CustomerRelationships,
        Region::CustomerSegments,
        Region::KeyResources,
        Region::Channels,
        Region::CostStructure,
        Region::RevenueStreams,
    ];

    /// Stable identifier, also used as the section key
    pub fn id(self) -> &'static str {
        match self {
            Region::CustomerSegments => "customerSegments",
            Region::ValuePropositions => "valuePropositions",
            Region::Channels => "channels",
            Region::CustomerRelationships => "customerRelationships",
            Region::RevenueStreams => "revenueStreams",
            Region::KeyActivities => "keyActivities",
            Region::KeyResources => "keyResources",
            Region::KeyPartners => "keyPartners",
            Region::CostStructure => "costStructure",
        }
    }

    /// Heading shown when the author's own title is unavailable
    pub fn title(self) -> &'static str {
        match self {
            Region::CustomerSegments => "Customer Segments",
            Region::ValuePropositions => "Value Propositions",
            Region::Channels => "Channels",
            Region::CustomerRelationships => "Customer Relationships",
            Region::RevenueStreams => "Revenue Streams",
            Region::KeyActivities => "Key Activities",
            Region::KeyResources => "Key Resources",
            Region::KeyPartners => "Key Partners",
            Region::CostStructure => "Cost Structure",
        }
    }

    /// Named cell of the canvas grid this region occupies
    pub fn grid_area(self) -> &'static str {
        match self {
            Region::CustomerSegments => "segments",
            Region::ValuePropositions => "value",
            Region::Channels => "channels",
            Region::CustomerRelationships => "relationships",
            Region::RevenueStreams => "revenue",
            Region::KeyActivities => "activities",
            Region::KeyResources => "resources",
            Region::KeyPartners => "partners",
            Region::CostStructure => "costs",
        }
    }
}

/// Identity of a parsed section: a standard region, or a key derived from
/// a heading that matched none of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalKey {
    Region(Region),
    AdHoc(String),
}

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalKey::Region(region) => region.id(),
            CanonicalKey::AdHoc(key) => key,
        }
    }

    pub fn region(&self) -> Option<Region> {
        match self {
            CanonicalKey::Region(region) => Some(*region),
            CanonicalKey::AdHoc(_) => None,
        }
    }
}

impl From<Region> for CanonicalKey {
    fn from(region: Region) -> Self {
        CanonicalKey::Region(region)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
