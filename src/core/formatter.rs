// src/core/formatter.rs

use tracing::debug;
use url::Url;

use crate::core::knowledge_base::guidance_for;
use crate::core::models::{Axis, FormattedResult, ScoreOutcome};

/// Display fallback when the target URL has no usable authority.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Extracts the network authority (`host[:port]`, with any userinfo) from `url`.
///
/// The authority is returned as written: host case and an explicit default port
/// are kept. Display-only context; returns `"unknown"` when the URL does not parse
/// or has no host.
pub fn extract_domain(url: &str) -> String {
    let url = url.trim();
    let has_host = Url::parse(url).is_ok_and(|parsed| parsed.host_str().is_some_and(|h| !h.is_empty()));
    if !has_host {
        debug!(url, "URL has no usable host, using fallback domain.");
        return UNKNOWN_DOMAIN.to_string();
    }

    let authority = url
        .split_once("://")
        .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
        .unwrap_or_default();
    if authority.is_empty() {
        return UNKNOWN_DOMAIN.to_string();
    }
    authority.to_string()
}

/// Turns a scorer's outcome into the human-readable report for one axis.
///
/// A probe failure passes through untouched as `{ error }`.
///
/// # Arguments
///
/// * `outcome` - The scorer's report, or the probe failure it could not score.
/// * `axis` - The axis the outcome belongs to; it names the report lines.
/// * `url` - The target exactly as the caller supplied it, quoted in the explanation.
/// * `domain` - The display authority from [`extract_domain`].
///
/// # Returns
///
/// `FormattedResult::Scored` with the one-line summary, the findings-based
/// explanation and the score-dependent suggestion, or `FormattedResult::Failed`.
pub fn format_report(outcome: &ScoreOutcome, axis: Axis, url: &str, domain: &str) -> FormattedResult {
    let report = match outcome {
        Ok(report) => report,
        Err(failure) => {
            return FormattedResult::Failed {
                error: failure.to_string(),
            };
        }
    };

    FormattedResult::Scored {
        score: report.score,
        one_line: format!("{} score: {}/100 for {}.", axis, report.score, domain),
        explanation: format!("{} check for {}: {}", axis, url, report.findings.join(" ")),
        suggestion: guidance_for(axis).suggestion(report.score, domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ProbeFailure, ScoreReport};

    #[test]
    fn domain_includes_explicit_port() {
        assert_eq!(extract_domain("http://127.0.0.1:8080/path"), "127.0.0.1:8080");
        assert_eq!(extract_domain("https://example.com/"), "example.com");
    }

    #[test]
    fn authority_is_kept_as_written() {
        assert_eq!(extract_domain("https://Example.com:443/x"), "Example.com:443");
        assert_eq!(extract_domain("https://user:pw@example.com:8443?q=1"), "user:pw@example.com:8443");
        assert_eq!(extract_domain("http://example.com#top"), "example.com");
    }

    #[test]
    fn hostless_url_falls_back_to_unknown() {
        assert_eq!(extract_domain("file:///etc/hosts"), "unknown");
        assert_eq!(extract_domain("mailto:someone@example.com"), "unknown");
    }

    #[test]
    fn unparseable_url_falls_back_to_unknown() {
        assert_eq!(extract_domain("not a url"), "unknown");
        assert_eq!(extract_domain("example.com"), "unknown");
        assert_eq!(extract_domain(""), "unknown");
    }

    #[test]
    fn scored_report_is_formatted() {
        let outcome = Ok(ScoreReport {
            score: 80,
            findings: vec!["SHA256 hash of content: abc".to_string(), "Content fetched.".to_string()],
        });
        let formatted = format_report(&outcome, Axis::Integrity, "https://example.com", "example.com");
        assert_eq!(
            formatted,
            FormattedResult::Scored {
                score: 80,
                one_line: "Integrity score: 80/100 for example.com.".to_string(),
                explanation: "Integrity check for https://example.com: SHA256 hash of content: abc Content fetched.".to_string(),
                suggestion: "Enhance integrity for example.com by continuing with current measures.".to_string(),
            }
        );
    }

    #[test]
    fn failure_passes_through() {
        let outcome = Err(ProbeFailure::new("dns error"));
        let formatted = format_report(&outcome, Axis::Availability, "https://x.invalid", "x.invalid");
        assert_eq!(
            formatted,
            FormattedResult::Failed {
                error: "Request failed: dns error".to_string()
            }
        );
    }
}
