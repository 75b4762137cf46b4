//! Convert text extracted from printed monthly activity calendars into a
//! normalized event sequence and serialize it as iCalendar.
//!
//! Facility activity calendars arrive as PDFs in several incompatible vendor
//! print layouts. After an external text-extraction step flattens a page into
//! one text blob, this crate recovers structured events from it:
//!
//! blob → [`line::normalize`] → [`strategy::classify`] → layout extractor →
//! [`event::finalize`] → [`generator::IcalFeed`].
//!
//! Unrecognized or unsupported layouts produce an empty event sequence plus a
//! diagnostic, never a guessed parse.
//!
//! # Examples
//!
//! ```rust
//! let text = "5\n9A Bingo\n";
//!
//! let extraction = calsift::extract(text);
//!
//! for event in &extraction.events {
//!     println!("{:?}", event);
//! }
//! ```

pub(crate) const CRLF: &str = "\r\n";

pub mod line;
pub use line::{Line, normalize};

pub mod strategy;
pub use strategy::{Document, Harvest, LayoutStrategy, classify};

pub mod event;
pub use event::{NormalizedEvent, RawEvent, finalize};

pub mod generator;
pub use generator::{Emitter, IcalFeed};

pub mod error;
pub use error::EngineError;

/// The outcome of one extraction pass.
///
/// Zero events alongside a diagnostic is a successful outcome; callers tell
/// "nothing was there" apart from "the format is unsupported" by reading the
/// diagnostics, not by error shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub events: Vec<NormalizedEvent>,
    /// Human-readable notes for operator visibility, not for branching.
    pub diagnostics: Vec<String>,
}

/// A finished conversion: the iCalendar document plus any diagnostics
/// gathered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub ics: String,
    pub diagnostics: Vec<String>,
}

/// Run the full extraction pipeline over an extracted text blob.
///
/// Never fails: local anomalies (a malformed line, an unknown layout) degrade
/// to an empty or partial result with diagnostics.
pub fn extract(text: &str) -> Extraction {
    let doc = Document::new(text);
    let Some(layout) = classify(&doc) else {
        return Extraction {
            events: vec![],
            diagnostics: vec!["format not recognized".to_owned()],
        };
    };
    let harvest = layout.extract(&doc);
    Extraction {
        events: finalize(harvest.events),
        diagnostics: harvest.diagnostics,
    }
}

/// Decode a transport payload into text.
///
/// Fails atomically on malformed input; no partial result is produced.
pub fn decode(payload: &[u8]) -> Result<&str, EngineError> {
    Ok(std::str::from_utf8(payload)?)
}

/// Decode, extract and serialize in one step. The timezone identifier is an
/// opaque passthrough echoed into the feed.
pub fn convert(payload: &[u8], timezone: &str) -> Result<Conversion, EngineError> {
    let text = decode(payload)?;
    Ok(convert_text(text, timezone))
}

/// Entry point for callers holding the outcome of the external text
/// extraction step. An upstream failure is propagated with its message
/// preserved.
pub fn convert_extracted(
    upstream: Result<String, String>,
    timezone: &str,
) -> Result<Conversion, EngineError> {
    let text = upstream.map_err(EngineError::Upstream)?;
    Ok(convert_text(&text, timezone))
}

fn convert_text(text: &str, timezone: &str) -> Conversion {
    let extraction = extract(text);
    let ics = IcalFeed::new(timezone, &extraction.events).generate();
    Conversion {
        ics,
        diagnostics: extraction.diagnostics,
    }
}
