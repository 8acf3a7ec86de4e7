//! Report error types.

use thiserror::Error;

/// Problems exporting or loading a [`RunReport`](super::RunReport).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot encode report as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// Malformed JSON, or a trace that does not start from an initial
    /// configuration
    #[error("Cannot decode report: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported report version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The verdict and the rejection reason disagree
    #[error("Report verdict accepted={accepted} disagrees with its rejection reason")]
    VerdictMismatch { accepted: bool },

    /// The trace stops somewhere the verdict does not explain
    #[error("Trace stops at position {stopped}, expected {expected} for a word of length {length}")]
    StopPosition {
        stopped: usize,
        expected: usize,
        length: usize,
    },
}
