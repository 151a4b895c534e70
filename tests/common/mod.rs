//! Shared helpers for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use cia_scanner::core::models::{ProbeOutcome, ProbeResponse};
use cia_scanner::{Prober, Settings};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::ResponseTemplate;

pub const SECURITY_HEADERS: [&str; 6] = [
    "Strict-Transport-Security",
    "Content-Security-Policy",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "Referrer-Policy",
    "Permissions-Policy",
];

/// Settings with a short probe timeout so timeout tests stay quick.
pub fn fast_settings() -> Settings {
    Settings {
        probe_timeout: Duration::from_millis(500),
        ..Settings::default()
    }
}

/// A 200 response carrying every recognised security header and a small body.
pub fn hardened_response() -> ResponseTemplate {
    SECURITY_HEADERS
        .iter()
        .fold(ResponseTemplate::new(200), |template, name| template.insert_header(*name, "x"))
        .set_body_string("<html>ok</html>")
}

/// A prober that replays one canned outcome and counts its calls.
pub struct ScriptedProber {
    outcome: ProbeOutcome,
    calls: AtomicUsize,
}

impl ScriptedProber {
    pub fn new(outcome: ProbeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(|mut response| {
            response.url = url.to_string();
            response
        })
    }
}

/// A canned response with the given headers, body, status and latency.
pub fn canned(headers: &[&str], body: &'static [u8], status: u16, elapsed_ms: u64) -> ProbeResponse {
    let mut map = HeaderMap::new();
    for name in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).unwrap();
        map.insert(name, HeaderValue::from_static("x"));
    }
    ProbeResponse {
        url: String::new(),
        status,
        headers: map,
        body: Bytes::from_static(body),
        elapsed: Duration::from_millis(elapsed_ms),
    }
}
