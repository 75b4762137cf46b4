//! The paragraph-block layout ("town hall style").
//!
//! These pages print one free-text paragraph per day, separated by blank
//! lines, with no day numbers or times at all. Fragments map one-to-one to
//! sequential day numbers, so extraction works on the raw pre-normalization
//! text where the paragraph breaks still exist.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::{Document, Harvest, LayoutStrategy};
use crate::event::RawEvent;

/// Section marker tokens identifying this vendor's pages.
const SECTION_MARKERS: &[&str] = &["TOWN HALL", "COMMUNITY BULLETIN"];
/// Fragments shorter than this are whitespace artifacts of extraction.
const MIN_FRAGMENT_LEN: usize = 4;
/// Fixed month assigned to this layout.
const MONTH: &str = "03";
const MAX_MONTH_DAYS: usize = 31;

lazy_static! {
    /// A run of two or more consecutive line breaks, i.e. a paragraph break.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"(?:\r\n|\n|\r){2,}").unwrap();
}

pub struct ParagraphBlock;

impl LayoutStrategy for ParagraphBlock {
    fn name(&self) -> &'static str {
        "paragraph-block"
    }

    fn matches(&self, doc: &Document) -> bool {
        let upper = doc.raw.to_uppercase();
        SECTION_MARKERS.iter().any(|marker| upper.contains(marker))
            && PARAGRAPH_BREAK.is_match(doc.raw)
    }

    fn extract(&self, doc: &Document) -> Harvest {
        let events = PARAGRAPH_BREAK
            .split(doc.raw)
            .map(str::trim)
            .filter(|fragment| fragment.len() >= MIN_FRAGMENT_LEN)
            .take(MAX_MONTH_DAYS)
            .enumerate()
            .map(|(offset, fragment)| {
                // Internal line breaks flatten to single spaces.
                let title = fragment.split_whitespace().join(" ");
                RawEvent::all_day(MONTH, Some(offset as u32 + 1), title)
            })
            .collect();
        Harvest {
            events,
            diagnostics: vec![],
        }
    }
}
