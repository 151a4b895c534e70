// src/core/scanner/mod.rs

// One module per CIA axis. Each exposes a pure `score_*` function over a probe
// response and a `run_*_scan` helper that performs its own probe first.
pub mod availability_scanner;
pub mod confidentiality_scanner;
pub mod integrity_scanner;

use crate::core::models::{Axis, ScoreOutcome};
use crate::core::probe::Prober;
use self::availability_scanner::run_availability_scan;
use self::confidentiality_scanner::run_confidentiality_scan;
use self::integrity_scanner::run_integrity_scan;

pub use self::availability_scanner::score_availability;
pub use self::confidentiality_scanner::score_confidentiality;
pub use self::integrity_scanner::score_integrity;

/// Runs the scan for one axis against a fresh probe of `url`.
///
/// Each call issues its own request, so running all three axes means three
/// independent round trips to the target.
///
/// # Arguments
///
/// * `prober` - The prober that performs the request.
/// * `axis` - Which scorer to apply to the captured response.
/// * `url` - The absolute URL of the target.
///
/// # Returns
///
/// The axis' `ScoreOutcome`: a scored report, or the probe failure that prevented scoring.
pub async fn run_axis_scan(prober: &dyn Prober, axis: Axis, url: &str) -> ScoreOutcome {
    match axis {
        Axis::Confidentiality => run_confidentiality_scan(prober, url).await,
        Axis::Integrity => run_integrity_scan(prober, url).await,
        Axis::Availability => run_availability_scan(prober, url).await,
    }
}
