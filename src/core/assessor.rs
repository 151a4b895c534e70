// src/core/assessor.rs

use std::str::FromStr;
use tracing::{info, warn};

use crate::core::formatter::{extract_domain, format_report};
use crate::core::models::{AnalysisReport, Axis, CiaDetails, CompositeReport, FormattedResult, TestType};
use crate::core::probe::Prober;
use crate::core::scanner::run_axis_scan;
use crate::error::AssessError;

/// Runs the selected axis scans and merges them into a report.
///
/// Stateless apart from the prober it owns, so one instance can serve any
/// number of concurrent callers.
pub struct Assessor<P> {
    prober: P,
}

impl<P: Prober> Assessor<P> {
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Assesses `url` with a selector given as its wire string.
    ///
    /// Unknown selectors produce an `{ error: "Unknown test type" }` payload rather than failing.
    pub async fn assess_raw(&self, url: &str, test_type: &str) -> AnalysisReport {
        match parse_test_type(test_type) {
            Ok(test_type) => self.assess(url, test_type).await,
            Err(e) => {
                warn!(test_type, "Rejected unknown test type.");
                AnalysisReport::Rejected { error: e.to_string() }
            }
        }
    }

    /// Assesses `url` along the axes `test_type` selects.
    ///
    /// A single-axis selector probes once and returns that axis' formatted result.
    /// `TestType::Cia` probes once per axis, concurrently, and merges the three
    /// results with [`compose`].
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL of the target.
    /// * `test_type` - The axis, or the full CIA assessment, to run.
    ///
    /// # Returns
    ///
    /// An `AnalysisReport::Single` or `AnalysisReport::Composite`. Probe failures are
    /// carried inside the report as `{ error }` values; this never fails.
    pub async fn assess(&self, url: &str, test_type: TestType) -> AnalysisReport {
        let domain = extract_domain(url);
        info!(url, domain = %domain, test_type = %test_type, "Starting assessment.");

        let report = match test_type.axis() {
            Some(axis) => AnalysisReport::Single(self.assess_axis(axis, url, &domain).await),
            None => AnalysisReport::Composite(self.assess_cia(url, &domain).await),
        };

        info!(score = ?report.score(), "Assessment finished.");
        report
    }

    async fn assess_axis(&self, axis: Axis, url: &str, domain: &str) -> FormattedResult {
        let outcome = run_axis_scan(&self.prober, axis, url).await;
        if let Err(failure) = &outcome {
            warn!(axis = %axis, error = %failure, "Axis scan could not probe the target.");
        }
        format_report(&outcome, axis, url, domain)
    }

    /// Every axis gets its own probe; the three run concurrently.
    async fn assess_cia(&self, url: &str, domain: &str) -> CompositeReport {
        let (confidentiality, integrity, availability) = tokio::join!(
            self.assess_axis(Axis::Confidentiality, url, domain),
            self.assess_axis(Axis::Integrity, url, domain),
            self.assess_axis(Axis::Availability, url, domain)
        );
        compose(
            CiaDetails {
                confidentiality,
                integrity,
                availability,
            },
            domain,
        )
    }
}

fn parse_test_type(raw: &str) -> Result<TestType, AssessError> {
    TestType::from_str(raw).map_err(|_| AssessError::UnknownTestType(raw.to_string()))
}

/// Merges three formatted axes into the composite report.
///
/// The overall score is the floored mean, and only exists when all three axes scored.
pub fn compose(details: CiaDetails, domain: &str) -> CompositeReport {
    let score = match (
        details.confidentiality.score(),
        details.integrity.score(),
        details.availability.score(),
    ) {
        (Some(c), Some(i), Some(a)) => Some(((c as u32 + i as u32 + a as u32) / 3) as u8),
        _ => None,
    };

    let one_line = match score {
        Some(score) => format!("Full CIA check for {}: Overall {}/100.", domain, score),
        None => "Error calculating overall score.".to_string(),
    };

    CompositeReport {
        score,
        one_line,
        details,
    }
}
