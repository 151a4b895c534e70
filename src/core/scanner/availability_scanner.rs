// src/core/scanner/availability_scanner.rs

use tracing::{debug, info};

use crate::core::models::{ProbeResponse, ScoreOutcome, ScoreReport};
use crate::core::probe::Prober;

const STATUS_OK_POINTS: u32 = 50;
const FAST_POINTS: u32 = 50;
const MODERATE_POINTS: u32 = 30;

/// Responses faster than this are "fast".
pub const FAST_THRESHOLD_SECS: f64 = 0.5;
/// Responses at or above this are "slow".
pub const SLOW_THRESHOLD_SECS: f64 = 1.5;

/// Scores status health and latency.
///
/// Only a 200 earns status points; other 2xx and 3xx codes get no partial credit.
/// Latency is the probe's send-to-body-read time, banded as fast (under 0.5 s),
/// moderate (under 1.5 s) or slow.
///
/// # Arguments
///
/// * `response` - The captured response of a successful probe.
///
/// # Returns
///
/// A `ScoreReport` with the clamped score and two findings: the status line and
/// the response-time band with the elapsed seconds to two decimals.
pub fn score_availability(response: &ProbeResponse) -> ScoreReport {
    let mut score = 0;
    let mut findings = Vec::new();

    if response.status == 200 {
        score += STATUS_OK_POINTS;
        findings.push("HTTP 200 OK received.".to_string());
    } else {
        debug!(status = response.status, "Non-200 status, no status points.");
        findings.push(format!("HTTP status code: {}", response.status));
    }

    let elapsed = response.elapsed_seconds();
    if elapsed < FAST_THRESHOLD_SECS {
        score += FAST_POINTS;
        findings.push(format!("Fast response time: {:.2} seconds.", elapsed));
    } else if elapsed < SLOW_THRESHOLD_SECS {
        score += MODERATE_POINTS;
        findings.push(format!("Moderate response time: {:.2} seconds.", elapsed));
    } else {
        findings.push(format!("Slow response time: {:.2} seconds.", elapsed));
    }

    ScoreReport::clamped(score, findings)
}

/// Probes the target and scores its availability.
///
/// # Arguments
///
/// * `prober` - The prober used for the single GET request.
/// * `url` - The absolute URL of the target.
///
/// # Returns
///
/// The availability `ScoreReport`, or the `ProbeFailure` if the request did not complete.
pub async fn run_availability_scan(prober: &dyn Prober, url: &str) -> ScoreOutcome {
    info!(url, "Starting availability scan.");
    let response = prober.probe(url).await?;
    let report = score_availability(&response);
    info!(score = report.score, "Availability scan finished.");
    Ok(report)
}
