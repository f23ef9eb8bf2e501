//! Canvas grid geometry estimated from a document before anything is painted.

use kurbo::Size;

use crate::models::{Document, Region};

/// Canvas grid areas, one string per row
pub const GRID_AREAS: [&str; 3] = [
    "partners activities value relationships segments",
    "partners resources value channels segments",
    "costs costs revenue revenue revenue",
];

pub const COLUMN_GAP: f64 = 24.0;
pub const CANVAS_HEIGHT: f64 = 800.0;
pub const MIN_REGION_WIDTH: f64 = 250.0;
pub const MAX_REGION_WIDTH: f64 = 400.0;

const DEFAULT_SIZE: Size = Size::new(1480.0, CANVAS_HEIGHT);
const DEFAULT_GRID_TEMPLATE: &str = "repeat(5, 280px)";

/// Columns of the grid, left to right, and the regions sharing each one
const COLUMNS: [&[Region]; 5] = [
    &[Region::KeyPartners],
    &[Region::KeyActivities, Region::KeyResources],
    &[Region::ValuePropositions],
    &[Region::CustomerRelationships, Region::Channels],
    &[Region::CustomerSegments],
];

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    /// `None` until a document is loaded
    column_widths: Option<[f64; 5]>,
}

impl CanvasLayout {
    pub fn estimate(document: Option<&Document>) -> Self {
        let column_widths = document.map(|doc| {
            COLUMNS.map(|regions| {
                regions
                    .iter()
                    .map(|region| region_width(doc, *region))
                    .fold(MIN_REGION_WIDTH, f64::max)
            })
        });
        Self { column_widths }
    }

    pub fn column_widths(&self) -> Option<[f64; 5]> {
        self.column_widths
    }

    pub fn size(&self) -> Size {
        match self.column_widths {
            Some(widths) => Size::new(
                widths.iter().sum::<f64>() + COLUMN_GAP * (widths.len() - 1) as f64,
                CANVAS_HEIGHT,
            ),
            None => DEFAULT_SIZE,
        }
    }

    /// Column track list in CSS `grid-template-columns` syntax.
    pub fn grid_template(&self) -> String {
        match self.column_widths {
            Some(widths) => widths
                .iter()
                .map(|width| format!("{width}px"))
                .collect::<Vec<_>>()
                .join(" "),
            None => DEFAULT_GRID_TEMPLATE.to_string(),
        }
    }
}

/// Width a region wants from the longest line it shows, title included.
fn region_width(document: &Document, region: Region) -> f64 {
    let Some(section) = document.region(region) else {
        return MIN_REGION_WIDTH;
    };
    let longest = std::iter::once(&section.original_title)
        .chain(&section.content)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    (200.0 + 3.0 * longest as f64).clamp(MIN_REGION_WIDTH, MAX_REGION_WIDTH)
}
