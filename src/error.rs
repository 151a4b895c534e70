//! Error types for the CIA scanner.
//!
//! Transport failures while probing are not errors in this sense: they are
//! captured as [`crate::core::models::ProbeFailure`] values and reported inside
//! the analysis payload. The types here cover requests the scanner refuses to
//! run and configuration problems at startup.

use thiserror::Error;

/// A request the aggregator cannot act upon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessError {
    /// The selector is not one of `confidentiality`, `integrity`, `availability`, `cia`.
    #[error("Unknown test type")]
    UnknownTestType(String),

    /// No target URL was supplied.
    #[error("No URL provided")]
    MissingUrl,
}

/// Invalid process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    BindAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("HTTP client could not be built: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure to start or keep running the HTTP service.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
