// src/core/mod.rs

// The scoring engine: probe a target, score it per axis, and turn the scores
// into a report. Everything outside `core` is a caller of `assessor`.

/// Data structures shared by every stage, from the raw probe response to the
/// composite CIA report.
pub mod models;

/// The outbound HTTP probe and the `Prober` seam used by the scanners.
pub mod probe;

/// One scorer per CIA axis.
pub mod scanner;

/// Static per-axis guidance used to build suggestions.
pub mod knowledge_base;

pub mod formatter;

/// Selects the scanners to run and merges their results.
pub mod assessor;
