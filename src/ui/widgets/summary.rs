// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use cia_scanner::core::knowledge_base::guidance_for;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    text::Line,
};

/// Rating band and color for a 0-100 score.
fn rating(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("Excellent", Color::Green),
        75..=89 => ("Good", Color::Cyan),
        50..=74 => ("Needs Improvement", Color::Yellow),
        _ => ("Poor", Color::Red),
    }
}

/// Renders the summary widget: headline score, animated gauge and the axis checklist.
///
/// Before an assessment finishes it describes what the selected axes measure instead.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & Rating section
            Constraint::Length(1), // Gauge chart
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Axis checks section
            Constraint::Min(0),    // What is measured
        ])
        .split(area);

    let axes: Vec<_> = match app.test_type.axis() {
        Some(axis) => vec![axis],
        None => app.summary.checks.iter().map(|c| c.axis).collect(),
    };

    if !matches!(app.state, AppState::Finished) {
        let about: Vec<Line> = match app.test_type.axis() {
            Some(axis) => vec![
                Line::styled(axis.to_string(), Style::default().bold()),
                Line::from(guidance_for(axis).description),
            ],
            None => vec![
                Line::from("Full CIA assessment".bold()),
                Line::from("Runs the confidentiality, integrity and availability checks, each with its own request, and averages the three scores."),
            ],
        };
        let block = Block::default().title("WHAT IT MEASURES".bold());
        let area = summary_chunks[3].union(summary_chunks[4]);
        frame.render_widget(Paragraph::new(about).wrap(Wrap { trim: true }).block(block), area);
        return;
    }

    // --- Score & Rating Section ---
    let score_text = match app.summary.score {
        Some(score) => {
            let (label, color) = rating(score);
            Text::from(vec![
                Line::from("Score".bold()),
                Line::from(format!("{}/100 ({})", score, label)).style(Style::default().fg(color)),
            ])
        }
        None => Text::from(vec![
            Line::from("Score".bold()),
            Line::from("Unavailable").style(Style::default().fg(Color::Red)),
        ]),
    };
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    let score_gauge = Gauge::default()
        .percent(app.displayed_score as u16)
        .label("")
        .style(Style::default().fg(rating(app.displayed_score).1));
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Axis Checks Section ---
    let checks_block = Block::default().title("CIA CHECKS".bold());
    let mut checks_lines = Vec::new();
    for check in &app.summary.checks {
        let (icon, style) = if check.passed {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(Color::Red))
        };
        let score = check.score.map(|s| format!(" {}/100", s)).unwrap_or_else(|| " error".to_string());
        checks_lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), style),
            Span::raw(check.axis.to_string()),
            Span::styled(score, Style::default().fg(Color::DarkGray)),
        ]));
    }
    frame.render_widget(Paragraph::new(checks_lines).block(checks_block), summary_chunks[3]);

    // --- Measurement notes ---
    let notes: Vec<Line> = axes
        .iter()
        .flat_map(|axis| [Line::styled(axis.to_string(), Style::default().bold()), Line::from(guidance_for(*axis).description)])
        .collect();
    let notes_block = Block::default().title("WHAT IT MEASURES".bold());
    frame.render_widget(Paragraph::new(notes).wrap(Wrap { trim: true }).block(notes_block), summary_chunks[4]);
}
