//! Event records and the deduplicating normalizer.
//!
//! Layout strategies emit [`RawEvent`]s with whatever they could recover;
//! [`finalize`] expands location short codes, discards records that never got
//! a day or a title, and collapses duplicates while preserving emission
//! order.

use itertools::Itertools;
use phf::phf_map;

/// Short location codes as printed on the calendars, mapped to display names.
/// Unknown codes pass through unchanged.
pub static LOCATION_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "MC" => "Memory Care",
    "AL" => "Assisted Living",
    "IL" => "Independent Living",
    "DR" => "Dining Room",
    "AR" => "Activity Room",
    "CY" => "Courtyard",
    "LB" => "Lobby",
    "CH" => "Chapel",
};

/// True when the text carries a known short code as a standalone token,
/// bracketed or not.
pub(crate) fn contains_location_code(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| LOCATION_CODES.contains_key(token))
}

/// An event as recovered by a layout strategy.
///
/// `hour == None` denotes an all-day event. `day` may still be unknown here;
/// such records are dropped by [`finalize`], not emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// Fixed two-digit month under which this line was parsed.
    pub month: String,
    pub day: Option<u32>,
    pub title: String,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub location: Option<String>,
}

impl RawEvent {
    pub fn all_day(month: &str, day: Option<u32>, title: String) -> Self {
        Self {
            month: month.to_owned(),
            day,
            title,
            hour: None,
            minute: None,
            location: None,
        }
    }

    pub fn timed(month: &str, day: Option<u32>, title: String, hour: u32, minute: u32) -> Self {
        Self {
            month: month.to_owned(),
            day,
            title,
            hour: Some(hour),
            minute: Some(minute),
            location: None,
        }
    }
}

/// A [`RawEvent`] that survived finalization: `day` is present, the title is
/// non-empty and any known location code has been expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub month: String,
    pub day: u32,
    pub title: String,
    pub hour: Option<u32>,
    pub minute: u32,
    pub location: Option<String>,
}

impl NormalizedEvent {
    fn from_raw(raw: RawEvent) -> Option<Self> {
        let day = raw.day?;
        if raw.title.is_empty() {
            return None;
        }
        let location = raw.location.map(|code| {
            LOCATION_CODES
                .get(code.as_str())
                .map(|name| (*name).to_owned())
                .unwrap_or(code)
        });
        Some(Self {
            month: raw.month,
            day,
            title: raw.title,
            hour: raw.hour,
            minute: raw.minute.unwrap_or(0),
            location,
        })
    }

    /// Two events with equal keys are duplicates; the month prefix keeps
    /// apart same-day titles parsed under different month assumptions.
    /// Hour and location are deliberately not part of the key.
    fn dedup_key(&self) -> (String, u32, String) {
        (self.month.clone(), self.day, self.title.clone())
    }
}

/// Expand, validate and deduplicate the raw emissions of one extraction pass.
///
/// Keeps only the first occurrence per dedup key, in emission order. Pure and
/// total; the worst outcome is an empty sequence.
pub fn finalize(raw: Vec<RawEvent>) -> Vec<NormalizedEvent> {
    raw.into_iter()
        .filter_map(NormalizedEvent::from_raw)
        .unique_by(NormalizedEvent::dedup_key)
        .collect()
}
