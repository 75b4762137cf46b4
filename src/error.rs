use std::str::Utf8Error;

/// Fatal failures of a whole conversion.
///
/// Recoverable anomalies never appear here: an unrecognized layout or a
/// malformed line degrades to diagnostics on [`crate::Extraction`] instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("input payload is not valid UTF-8 text")]
    InputDecode(#[from] Utf8Error),
    #[error("text extraction failed: {0}")]
    Upstream(String),
}

impl EngineError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}
