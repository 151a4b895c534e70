// src/app.rs

use cia_scanner::core::knowledge_base::guidance_for;
use cia_scanner::core::models::{AnalysisReport, Axis, TestType};
use ratatui::widgets::ScrollbarState;
use url::Url;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How many trailing log lines the log panel keeps.
const LOG_TAIL_LINES: usize = 200;

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

/// One axis as shown in the summary checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisCheck {
    pub axis: Axis,
    pub score: Option<u8>,
    pub passed: bool,
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub score: Option<u8>,
    pub checks: Vec<AxisCheck>,
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub state: AppState,
    pub input: String,
    pub input_error: Option<String>,
    pub test_type: TestType,
    pub report: Option<AnalysisReport>,
    pub summary: ScanSummary,
    pub displayed_score: u8,
    pub spinner_frame: usize,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_disclaimer: true,
            state: AppState::Idle,
            input: String::new(),
            input_error: None,
            test_type: TestType::Cia,
            report: None,
            summary: ScanSummary::default(),
            displayed_score: 0,
            spinner_frame: 0,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            show_logs: false,
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    /// Validates the typed URL and, if acceptable, moves to `Scanning`.
    ///
    /// Returns the target and selector to assess, or `None` with `input_error` set.
    pub fn submit(&mut self) -> Option<(String, TestType)> {
        let target = self.input.trim();
        if target.is_empty() {
            self.input_error = Some("Please enter the URL.".to_string());
            return None;
        }
        if Url::parse(target).is_err() {
            self.input_error = Some("Please enter a valid URL.".to_string());
            return None;
        }

        self.input_error = None;
        self.state = AppState::Scanning;
        Some((target.to_string(), self.test_type))
    }

    pub fn cycle_test_type(&mut self) {
        self.test_type = self.test_type.next();
    }

    pub fn finish(&mut self, report: AnalysisReport) {
        self.report = Some(report);
        self.state = AppState::Finished;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.displayed_score = 0;
        self.update_summary();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Rebuilds the summary checklist from the current report.
    pub fn update_summary(&mut self) {
        let Some(report) = &self.report else {
            self.summary = ScanSummary::default();
            return;
        };

        let checks = match report {
            AnalysisReport::Composite(composite) => composite
                .details
                .iter()
                .map(|(axis, result)| axis_check(axis, result.score()))
                .collect(),
            AnalysisReport::Single(result) => self
                .test_type
                .axis()
                .map(|axis| vec![axis_check(axis, result.score())])
                .unwrap_or_default(),
            AnalysisReport::Rejected { .. } => Vec::new(),
        };

        self.summary = ScanSummary {
            score: report.score(),
            checks,
        };
    }

    /// Advances the spinner and animates the gauge towards the final score.
    pub fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        if let Some(target) = self.summary.score {
            if self.displayed_score < target {
                self.displayed_score = (self.displayed_score + 2).min(target);
            }
        }
        if self.show_logs {
            self.refresh_logs();
        }
    }

    fn refresh_logs(&mut self) {
        if let Ok(content) = std::fs::read_to_string(cia_scanner::logging::log_file_path()) {
            let lines: Vec<&str> = content.lines().collect();
            let start = lines.len().saturating_sub(LOG_TAIL_LINES);
            self.log_content = lines[start..].iter().map(|l| l.to_string()).collect();
        }
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.input_error = None;
        self.report = None;
        self.summary = ScanSummary::default();
        self.displayed_score = 0;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }
}

fn axis_check(axis: Axis, score: Option<u8>) -> AxisCheck {
    AxisCheck {
        axis,
        score,
        passed: score.is_some_and(|s| guidance_for(axis).is_healthy(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cia_scanner::core::models::{CiaDetails, CompositeReport, FormattedResult};

    fn scored(score: u8) -> FormattedResult {
        FormattedResult::Scored {
            score,
            one_line: String::new(),
            explanation: String::new(),
            suggestion: String::new(),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut app = App::new();
        app.input = "   ".to_string();
        assert!(app.submit().is_none());
        assert_eq!(app.input_error.as_deref(), Some("Please enter the URL."));
        assert!(matches!(app.state, AppState::Idle));
    }

    #[test]
    fn relative_input_is_rejected() {
        let mut app = App::new();
        app.input = "example.com".to_string();
        assert!(app.submit().is_none());
        assert_eq!(app.input_error.as_deref(), Some("Please enter a valid URL."));
    }

    #[test]
    fn valid_input_starts_scanning() {
        let mut app = App::new();
        app.input = " https://example.com ".to_string();
        app.cycle_test_type();
        let (url, test_type) = app.submit().unwrap();
        assert_eq!(url, "https://example.com");
        assert_eq!(test_type, TestType::Confidentiality);
        assert!(matches!(app.state, AppState::Scanning));
    }

    #[test]
    fn composite_summary_lists_every_axis() {
        let mut app = App::new();
        app.finish(AnalysisReport::Composite(CompositeReport {
            score: Some(80),
            one_line: String::new(),
            details: CiaDetails {
                confidentiality: scored(90),
                integrity: scored(80),
                availability: scored(70),
            },
        }));
        assert_eq!(app.summary.score, Some(80));
        let passed: Vec<bool> = app.summary.checks.iter().map(|c| c.passed).collect();
        assert_eq!(passed, vec![true, true, false]);
    }

    #[test]
    fn gauge_animation_stops_at_score() {
        let mut app = App::new();
        app.test_type = TestType::Integrity;
        app.finish(AnalysisReport::Single(scored(5)));
        for _ in 0..10 {
            app.on_tick();
        }
        assert_eq!(app.displayed_score, 5);
    }
}
