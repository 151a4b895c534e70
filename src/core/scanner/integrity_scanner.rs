// src/core/scanner/integrity_scanner.rs

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::core::models::{ProbeResponse, ScoreOutcome, ScoreReport};
use crate::core::probe::Prober;

const NON_EMPTY_SCORE: u32 = 80;
const EMPTY_SCORE: u32 = 40;

/// Hex-encoded SHA-256 digest of a response body.
pub fn content_digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    format!("{:x}", hasher.finalize())
}

/// Scores content retrievability.
///
/// This is a heuristic: the digest is recorded for reference only and is not
/// compared against any baseline or signature, so tampering goes undetected.
/// Only an empty body lowers the score.
///
/// # Arguments
///
/// * `response` - The captured response whose body is hashed.
///
/// # Returns
///
/// A `ScoreReport` of 80 for a non-empty body or 40 for an empty one, with the
/// hex digest as the first finding and the content verdict as the second.
pub fn score_integrity(response: &ProbeResponse) -> ScoreReport {
    let digest = content_digest(&response.body);
    debug!(digest = %digest, bytes = response.body.len(), "Computed content digest.");

    let mut findings = vec![format!("SHA256 hash of content: {}", digest)];
    let score = if response.body.is_empty() {
        findings.push("Empty content, potential integrity issue.".to_string());
        EMPTY_SCORE
    } else {
        findings.push("Content fetched successfully, integrity likely good.".to_string());
        NON_EMPTY_SCORE
    };

    ScoreReport::clamped(score, findings)
}

/// Probes the target and scores its integrity.
///
/// # Arguments
///
/// * `prober` - The prober used for the single GET request.
/// * `url` - The absolute URL of the target.
///
/// # Returns
///
/// The integrity `ScoreReport`, or the `ProbeFailure` if the request did not complete.
pub async fn run_integrity_scan(prober: &dyn Prober, url: &str) -> ScoreOutcome {
    info!(url, "Starting integrity scan.");
    let response = prober.probe(url).await?;
    let report = score_integrity(&response);
    info!(score = report.score, "Integrity scan finished.");
    Ok(report)
}
