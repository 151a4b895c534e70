// src/config.rs

use crate::error::ConfigError;
use lazy_static::lazy_static;
use std::net::SocketAddr;
use std::time::Duration;

lazy_static! {
    pub static ref ENV_PREFIX: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref ADDR_ENV: String = format!("{}_ADDR", ENV_PREFIX.clone());
    pub static ref USER_AGENT_ENV: String = format!("{}_USER_AGENT", ENV_PREFIX.clone());
    pub static ref DEFAULT_USER_AGENT: String = format!("CIA-Scanner/{}", env!("CARGO_PKG_VERSION"));
}

/// Bound applied to each probe, covering connect, headers and body.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Address the HTTP service binds to when nothing else is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub user_agent: String,
    pub probe_timeout: Duration,
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var(ADDR_ENV.as_str()).ok();
        let user_agent = std::env::var(USER_AGENT_ENV.as_str()).ok();
        Self::resolve(bind.as_deref(), user_agent.as_deref())
    }

    /// Builds settings from optional raw values; `None` or blank means default.
    pub fn resolve(bind: Option<&str>, user_agent: Option<&str>) -> Result<Self, ConfigError> {
        let raw_bind = bind
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = parse_bind_addr(raw_bind)?;

        let user_agent = user_agent
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.clone());

        Ok(Self {
            bind_addr,
            user_agent,
            probe_timeout: PROBE_TIMEOUT,
        })
    }

    /// Replaces the bind address, e.g. from a command-line argument.
    pub fn with_bind_addr(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.bind_addr = parse_bind_addr(raw)?;
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            user_agent: DEFAULT_USER_AGENT.clone(),
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|source| ConfigError::BindAddress {
        value: raw.to_string(),
        source,
    })
}
