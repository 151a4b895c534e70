//! Static, read-only guidance for each CIA axis.
//!
//! Holds what each axis measures and the score-dependent advice the formatter
//! turns into a suggestion sentence. Keeping it data-driven means the wording
//! can change without touching the scoring or formatting code.

use crate::core::models::Axis;

/// Everything the report layer needs to describe one axis.
pub struct AxisGuidance {
    pub axis: Axis,
    /// A short explanation of what the axis measures, shown in the UI details pane.
    pub description: &'static str,
    /// Scores strictly above this count as healthy.
    pub healthy_above: u8,
    /// Sentence template; `{domain}` and `{advice}` are substituted.
    pub template: &'static str,
    pub advice_healthy: &'static str,
    pub advice_unhealthy: &'static str,
}

impl AxisGuidance {
    pub fn is_healthy(&self, score: u8) -> bool {
        score > self.healthy_above
    }

    /// Picks the advice for `score` and renders the suggestion for `domain`.
    pub fn suggestion(&self, score: u8, domain: &str) -> String {
        let advice = if self.is_healthy(score) {
            self.advice_healthy
        } else {
            self.advice_unhealthy
        };
        self.template
            .replace("{domain}", domain)
            .replace("{advice}", advice)
    }
}

static GUIDANCE: &[AxisGuidance] = &[
    AxisGuidance {
        axis: Axis::Confidentiality,
        description: "Transport security posture: whether the site is served over HTTPS and which of the six recognised security headers (HSTS, CSP, X-Content-Type-Options, X-Frame-Options, Referrer-Policy, Permissions-Policy) it sends.",
        healthy_above: 70,
        template: "For {domain}, {advice}.",
        advice_healthy: "maintain current practices",
        advice_unhealthy: "implement HTTPS and add security headers",
    },
    AxisGuidance {
        axis: Axis::Integrity,
        description: "Content retrievability: the response body is fetched and its SHA-256 digest recorded for reference. This flags empty responses only; it does not detect tampering.",
        healthy_above: 75,
        template: "Enhance integrity for {domain} by {advice}.",
        advice_healthy: "continuing with current measures",
        advice_unhealthy: "using strong hashing",
    },
    AxisGuidance {
        axis: Axis::Availability,
        description: "Status and latency health: a 200 response earns half the score, and response time earns the rest (fast under 0.5s, moderate under 1.5s, slow otherwise).",
        healthy_above: 80,
        template: "Improve availability for {domain} by {advice}.",
        advice_healthy: "maintaining uptime",
        advice_unhealthy: "adding caching and optimization",
    },
];

/// Retrieves the guidance entry for an axis.
pub fn guidance_for(axis: Axis) -> &'static AxisGuidance {
    GUIDANCE
        .iter()
        .find(|g| g.axis == axis)
        .unwrap_or(&GUIDANCE[0])
}
