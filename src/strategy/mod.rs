//! Layout detection and selection.
//!
//! Each supported vendor print layout is a [`LayoutStrategy`]: a stateless
//! detector paired with a stateful extractor. Strategies are registered in a
//! fixed priority order and [`classify`] returns the first whose detector
//! matches; when none does the caller reports "unrecognized" instead of
//! falling through to a default parse.

pub mod dense_grid;
pub use dense_grid::DenseGrid;
pub mod meridiem;
pub use meridiem::TimeMeridiem;
pub mod paragraph;
pub use paragraph::ParagraphBlock;

use crate::event::RawEvent;
use crate::line::{self, Line};

/// A document under classification: the normalized lines plus the raw
/// pre-normalization text, because paragraph breaks are exactly the signal
/// normalization discards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub raw: &'a str,
    pub lines: Vec<Line>,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lines: line::normalize(raw),
        }
    }
}

/// What one strategy recovered from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    pub events: Vec<RawEvent>,
    pub diagnostics: Vec<String>,
}

/// A pluggable detector/extractor pair for one vendor print layout.
pub trait LayoutStrategy: Sync {
    fn name(&self) -> &'static str;

    /// Signature predicate. Strategies are mutually exclusive by convention:
    /// exactly one should match a given supported document.
    fn matches(&self, doc: &Document) -> bool;

    /// Walk the document and emit raw events. Must not fail: malformed lines
    /// are skipped, unsupported layouts yield an empty harvest with a
    /// diagnostic.
    fn extract(&self, doc: &Document) -> Harvest;
}

/// Registered strategies in detection priority order.
///
/// The paragraph-block signature is checked on unsegmented text and is the
/// most specific. Dense-grid must run before time-meridiem because dense
/// grids frequently contain meridiem-shaped substrings that would otherwise
/// false-positive. Time-meridiem is the most general and therefore last.
pub static STRATEGIES: &[&dyn LayoutStrategy] = &[&ParagraphBlock, &DenseGrid, &TimeMeridiem];

/// Select the first registered strategy whose detector matches, or `None`
/// when the layout is unrecognized.
pub fn classify(doc: &Document) -> Option<&'static dyn LayoutStrategy> {
    STRATEGIES.iter().copied().find(|s| s.matches(doc))
}
