// src/core/models.rs

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

// --- Axes & Test Selectors ---

/// One of the three independent scoring dimensions.
///
/// `Display` yields the capitalised name used in report text ("Confidentiality"),
/// while serde uses the lowercase wire name ("confidentiality").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Confidentiality,
    Integrity,
    Availability,
}

/// The test selector supplied by the caller.
///
/// Only the exact lowercase wire strings parse; the assessor turns anything else
/// into [`crate::error::AssessError::UnknownTestType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TestType {
    Confidentiality,
    Integrity,
    Availability,
    Cia,
}

impl TestType {
    /// Returns the single axis this selector runs, or `None` for the full CIA assessment.
    pub fn axis(self) -> Option<Axis> {
        match self {
            TestType::Confidentiality => Some(Axis::Confidentiality),
            TestType::Integrity => Some(Axis::Integrity),
            TestType::Availability => Some(Axis::Availability),
            TestType::Cia => None,
        }
    }

    /// The selector that follows this one in the UI cycle.
    pub fn next(self) -> Self {
        match self {
            TestType::Confidentiality => TestType::Integrity,
            TestType::Integrity => TestType::Availability,
            TestType::Availability => TestType::Cia,
            TestType::Cia => TestType::Confidentiality,
        }
    }
}

// --- Probe Models ---

/// Raw data captured from one successful probe of the target.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// The URL as it was requested (before any redirect).
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// Wall-clock time from just before sending to just after the body was read.
    pub elapsed: Duration,
}

impl ProbeResponse {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A transport-level failure captured at the probe boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request failed: {message}")]
pub struct ProbeFailure {
    pub message: String,
}

impl ProbeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Exactly one of a response or a failure per probe attempt.
pub type ProbeOutcome = Result<ProbeResponse, ProbeFailure>;

// --- Score Models ---

/// Upper bound of every axis score.
pub const MAX_SCORE: u32 = 100;

/// A scorer's verdict over a single probe response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub findings: Vec<String>,
}

impl ScoreReport {
    /// Builds a report from a raw accumulated score, clamping it to `[0, 100]`.
    pub fn clamped(raw_score: u32, findings: Vec<String>) -> Self {
        Self {
            score: raw_score.min(MAX_SCORE) as u8,
            findings,
        }
    }
}

/// What a scorer hands to the formatter: a report, or the probe failure it could not score.
pub type ScoreOutcome = Result<ScoreReport, ProbeFailure>;

// --- Formatted Output ---

/// A human-readable rendition of one axis.
///
/// Serialized untagged so the JSON shape is either the four scored fields or a bare `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedResult {
    Scored {
        score: u8,
        one_line: String,
        explanation: String,
        suggestion: String,
    },
    Failed {
        error: String,
    },
}

impl FormattedResult {
    pub fn score(&self) -> Option<u8> {
        match self {
            FormattedResult::Scored { score, .. } => Some(*score),
            FormattedResult::Failed { .. } => None,
        }
    }
}

/// Per-axis results of a full CIA assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiaDetails {
    pub confidentiality: FormattedResult,
    pub integrity: FormattedResult,
    pub availability: FormattedResult,
}

impl CiaDetails {
    /// Iterates the three results in C, I, A order alongside their axis.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &FormattedResult)> {
        [
            (Axis::Confidentiality, &self.confidentiality),
            (Axis::Integrity, &self.integrity),
            (Axis::Availability, &self.availability),
        ]
        .into_iter()
    }
}

/// The merged report of the `cia` selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeReport {
    /// `None` (JSON `null`) when any axis failed.
    pub score: Option<u8>,
    pub one_line: String,
    pub details: CiaDetails,
}

/// Everything the aggregator can hand back to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Composite(CompositeReport),
    Single(FormattedResult),
    /// The request itself was not acceptable (e.g. unknown test type).
    Rejected { error: String },
}

impl AnalysisReport {
    /// The headline score, if one could be computed.
    pub fn score(&self) -> Option<u8> {
        match self {
            AnalysisReport::Composite(report) => report.score,
            AnalysisReport::Single(result) => result.score(),
            AnalysisReport::Rejected { .. } => None,
        }
    }

    /// The top-level error message, if the report is an error payload.
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisReport::Single(FormattedResult::Failed { error }) => Some(error),
            AnalysisReport::Rejected { error } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisReport::Composite(report) => write!(f, "{}", report.one_line),
            AnalysisReport::Single(FormattedResult::Scored { one_line, .. }) => write!(f, "{}", one_line),
            AnalysisReport::Single(FormattedResult::Failed { error }) => write!(f, "{}", error),
            AnalysisReport::Rejected { error } => write!(f, "{}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn score_is_clamped_to_one_hundred() {
        let report = ScoreReport::clamped(110, Vec::new());
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_type_parses_wire_names_only() {
        assert_eq!(TestType::from_str("cia").unwrap(), TestType::Cia);
        assert_eq!(TestType::from_str("integrity").unwrap(), TestType::Integrity);
        assert!(TestType::from_str("bogus").is_err());
        assert!(TestType::from_str("CIA").is_err());
    }

    #[test]
    fn axis_display_is_capitalised() {
        assert_eq!(Axis::Confidentiality.to_string(), "Confidentiality");
        assert_eq!(Axis::Availability.to_string(), "Availability");
    }

    #[test]
    fn formatted_failure_serializes_as_bare_error() {
        let failed = FormattedResult::Failed { error: "Request failed: boom".to_string() };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Request failed: boom" }));
    }

    #[test]
    fn composite_without_score_serializes_null() {
        let failed = FormattedResult::Failed { error: "x".to_string() };
        let report = AnalysisReport::Composite(CompositeReport {
            score: None,
            one_line: "Error calculating overall score.".to_string(),
            details: CiaDetails {
                confidentiality: failed.clone(),
                integrity: failed.clone(),
                availability: failed,
            },
        });
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["score"].is_null());
        assert_eq!(json["details"]["integrity"]["error"], "x");
    }

    #[test]
    fn probe_failure_message_is_prefixed() {
        let failure = ProbeFailure::new("connection refused");
        assert_eq!(failure.to_string(), "Request failed: connection refused");
    }
}
