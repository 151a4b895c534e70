// src/core/scanner/confidentiality_scanner.rs

use reqwest::header::HeaderMap;
use tracing::{debug, info};

use crate::core::models::{ProbeResponse, ScoreOutcome, ScoreReport};
use crate::core::probe::Prober;

/// Security headers that each earn points when present, in reporting order.
pub const SECURITY_HEADERS: [&str; 6] = [
    "Strict-Transport-Security",
    "Content-Security-Policy",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "Referrer-Policy",
    "Permissions-Policy",
];

const HTTPS_POINTS: u32 = 50;
const HEADER_POINTS: u32 = 10;

/// Checks for the presence of a header. `HeaderMap` lookups are case-insensitive.
fn has_header(headers: &HeaderMap, name: &str) -> bool {
    let present = headers.contains_key(name);
    debug!(header_name = name, present, "Checked security header.");
    present
}

fn is_https(url: &str) -> bool {
    url.get(..8)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("https://"))
}

/// Scores transport security posture: scheme plus recognised security headers.
///
/// Headers are checked regardless of scheme, so a plain-HTTP response carrying
/// all six can still reach the cap.
///
/// # Arguments
///
/// * `response` - The captured response; its `url` decides the scheme bonus.
///
/// # Returns
///
/// A `ScoreReport` with the clamped score, a finding on the scheme, and a finding
/// listing the security headers present (or noting that none were).
pub fn score_confidentiality(response: &ProbeResponse) -> ScoreReport {
    let mut score = 0;
    let mut findings = Vec::new();

    if is_https(&response.url) {
        score += HTTPS_POINTS;
        findings.push("HTTPS detected, improving confidentiality.".to_string());
    } else {
        findings.push("HTTP detected, consider upgrading to HTTPS.".to_string());
    }

    let present: Vec<&str> = SECURITY_HEADERS
        .iter()
        .copied()
        .filter(|name| has_header(&response.headers, name))
        .collect();
    score += HEADER_POINTS * present.len() as u32;

    if present.is_empty() {
        findings.push("No important security headers detected.".to_string());
    } else {
        findings.push(format!("Security headers present: {}.", present.join(", ")));
    }

    ScoreReport::clamped(score, findings)
}

/// Probes the target and scores its confidentiality.
///
/// # Arguments
///
/// * `prober` - The prober used for the single GET request.
/// * `url` - The absolute URL of the target.
///
/// # Returns
///
/// The confidentiality `ScoreReport`, or the `ProbeFailure` if the request did not complete.
pub async fn run_confidentiality_scan(prober: &dyn Prober, url: &str) -> ScoreOutcome {
    info!(url, "Starting confidentiality scan.");
    let response = prober.probe(url).await?;
    let report = score_confidentiality(&response);
    info!(score = report.score, "Confidentiality scan finished.");
    debug!(findings = ?report.findings, "Confidentiality findings.");
    Ok(report)
}
