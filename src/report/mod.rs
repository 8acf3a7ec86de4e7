//! Serializable run reports.
//!
//! A report is a self-contained snapshot of one finished run that a
//! presentation layer can render later, or in another process, without
//! access to the engine.

use crate::core::Configuration;
use crate::engine::{Rejection, RunOutcome};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Snapshot of a finished run.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::balanced_parentheses;
/// use pushdown::engine::run;
/// use pushdown::report::RunReport;
///
/// let outcome = run(&balanced_parentheses(), "()").unwrap();
/// let report = RunReport::new("()", outcome);
///
/// let json = report.to_json().unwrap();
/// let restored = RunReport::from_json(&json).unwrap();
/// assert!(restored.outcome.accepted);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Report format version
    pub version: u32,

    /// The input word
    pub word: String,

    /// Verdict, trace and rejection reason
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn new(word: impl Into<String>, outcome: RunOutcome) -> Self {
        Self {
            version: REPORT_VERSION,
            word: word.into(),
            outcome,
        }
    }

    /// The configuration the run stopped in.
    pub fn final_configuration(&self) -> &Configuration {
        self.outcome.final_configuration()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(ReportError::Encode)
    }

    /// Load a report from JSON, checking its version and consistency.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }

        let outcome = &self.outcome;
        if outcome.accepted == outcome.rejection.is_some() {
            return Err(ReportError::VerdictMismatch {
                accepted: outcome.accepted,
            });
        }

        let stopped = self.final_configuration().position;
        let length = self.word.chars().count();
        let expected = match &outcome.rejection {
            Some(Rejection::NoTransition { position, .. }) => *position,
            _ => length,
        };
        if stopped != expected {
            return Err(ReportError::StopPosition {
                stopped,
                expected,
                length,
            });
        }

        Ok(())
    }
}
