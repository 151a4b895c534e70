// src/core/probe.rs

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::core::models::{ProbeFailure, ProbeOutcome, ProbeResponse};
use crate::error::ConfigError;

/// Performs one bounded outbound GET against a target.
///
/// Implementations must never panic or return early with an error type: every
/// network-layer problem is reported as a [`ProbeFailure`] value.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// The production prober, backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.probe_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        if url.trim().is_empty() {
            error!("Refusing to probe an empty URL.");
            return Err(ProbeFailure::new("empty URL"));
        }

        info!(url, "Probing target.");
        let start = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(url, error = %e, "HTTP request failed.");
            ProbeFailure::new(describe(&e))
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        debug!(url, status, header_count = headers.len(), "Response headers received.");

        let body = response.bytes().await.map_err(|e| {
            error!(url, error = %e, "Failed to read response body.");
            ProbeFailure::new(describe(&e))
        })?;
        let elapsed = start.elapsed();

        info!(url, status, bytes = body.len(), elapsed_ms = elapsed.as_millis() as u64, "Probe finished.");
        Ok(ProbeResponse {
            url: url.to_string(),
            status,
            headers,
            body,
            elapsed,
        })
    }
}

/// Flattens a reqwest error and its source chain into one message.
fn describe(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    };
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
