//! The dense numbered-grid layout ("activity connection style").
//!
//! Recognized but not extracted: these grids interleave day numbers, times
//! and short codes so tightly that a best-effort parse would emit garbage.
//! Detection exists to classify-and-reject with a clear diagnostic before
//! the more general time-meridiem detector can false-positive on the
//! meridiem-shaped substrings these pages are full of.

use super::meridiem::{DAY_ONLY, MERIDIEM_TOKEN};
use super::{Document, Harvest, LayoutStrategy};
use crate::event::contains_location_code;

/// Minimum count of bare day-number lines for the grid signature.
const DAY_LINE_THRESHOLD: usize = 20;

pub struct DenseGrid;

impl LayoutStrategy for DenseGrid {
    fn name(&self) -> &'static str {
        "dense-grid"
    }

    fn matches(&self, doc: &Document) -> bool {
        let day_lines = doc
            .lines
            .iter()
            .filter(|l| DAY_ONLY.is_match(&l.text))
            .count();
        day_lines >= DAY_LINE_THRESHOLD
            && doc.lines.iter().any(|l| MERIDIEM_TOKEN.is_match(&l.text))
            && doc.lines.iter().any(|l| contains_location_code(&l.text))
    }

    fn extract(&self, _doc: &Document) -> Harvest {
        Harvest {
            events: vec![],
            diagnostics: vec!["unsupported layout (dense-grid)".to_owned()],
        }
    }
}
