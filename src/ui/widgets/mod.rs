// src/ui/widgets/mod.rs

pub mod analysis_view;    // Per-axis report with explanations and suggestions.
pub mod footer;           // Key hints for the current state.
pub mod input;            // Target URL and test type selector.
pub mod disclaimer_popup; // Authorised-use notice shown on launch.
pub mod summary;          // Headline score, gauge and axis checklist.
pub mod log_view;         // Tail of the log file.
