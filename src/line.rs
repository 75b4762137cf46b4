//! Collapse an extraction blob into trimmed, indexed lines.
//!
//! The upstream text extractor returns one blob with embedded line breaks and
//! whitespace anomalies. Normalization splits it into non-empty lines while
//! remembering how far each one was indented on the page, since indentation
//! is the only signal left for wrapped titles.

use derive_more::Display;

/// One trimmed, non-empty line of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{text}")]
pub struct Line {
    pub text: String,
    /// Leading-whitespace length of the original, pre-trim line.
    pub indent: usize,
    /// Zero-based position within the normalized sequence.
    pub index: usize,
}

/// Split a blob on any of `\n`, `\r` or `\r\n` and drop lines that are empty
/// after trimming. Deterministic and total.
pub fn normalize(raw: &str) -> Vec<Line> {
    raw.split(['\n', '\r'])
        .filter_map(|segment| {
            let text = segment.trim();
            if text.is_empty() {
                return None;
            }
            let indent = segment.chars().take_while(|c| c.is_whitespace()).count();
            Some((text.to_owned(), indent))
        })
        .enumerate()
        .map(|(index, (text, indent))| Line {
            text,
            indent,
            index,
        })
        .collect()
}
