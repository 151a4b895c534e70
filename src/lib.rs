//! CIA Scanner
//!
//! Probes a web resource over HTTP(S) and scores it along three axes:
//! confidentiality (transport security posture), integrity (content
//! retrievability) and availability (status and latency).
//!
//! The scoring engine lives in [`core`]; [`server`] exposes it over HTTP and
//! the binary adds a terminal UI and a one-shot command.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod server;

pub use crate::config::Settings;
pub use crate::core::assessor::Assessor;
pub use crate::core::models::{AnalysisReport, Axis, FormattedResult, TestType};
pub use crate::core::probe::{HttpProber, Prober};
pub use crate::error::{AssessError, ConfigError, ServeError};
