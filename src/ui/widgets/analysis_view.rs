// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use cia_scanner::core::knowledge_base::guidance_for;
use cia_scanner::core::models::{AnalysisReport, Axis, FormattedResult};
use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    text::Line,
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Assessment Report (Navigate with ↑ ↓)");

    let report = match (&app.state, &app.report) {
        (AppState::Finished, Some(report)) => report,
        _ => {
            let content = match app.state {
                AppState::Scanning => {
                    let spinner_char = SPINNER_CHARS[app.spinner_frame];
                    Paragraph::new(Line::from(vec![
                        Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                        Span::raw(format!("Running {} assessment... Please wait.", app.test_type)),
                    ]))
                }
                _ => match &app.input_error {
                    Some(error) => Paragraph::new(Line::from(error.as_str().red().bold())),
                    None => Paragraph::new("Enter a full URL (e.g. https://example.com) and press Enter."),
                },
            };
            frame.render_widget(content.alignment(Alignment::Center).block(main_block), area);
            return;
        }
    };

    let lines = build_report_lines(report);
    let line_count = lines.len();
    let paragraph = Paragraph::new(lines)
        .block(main_block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);

    app.report_scroll_state = app.report_scroll_state.content_length(line_count);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area.inner(Margin { vertical: 1, horizontal: 0 }),
        &mut app.report_scroll_state,
    );
}

fn build_report_lines(report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match report {
        AnalysisReport::Rejected { error } => {
            lines.push(Line::styled(format!("✗ {}", error), Style::default().fg(Color::Red).bold()));
        }
        AnalysisReport::Single(result) => {
            if let FormattedResult::Failed { error } = result {
                lines.push(Line::styled(format!("✗ {}", error), Style::default().fg(Color::Red).bold()));
            } else {
                push_result(&mut lines, None, result);
            }
        }
        AnalysisReport::Composite(composite) => {
            let headline_style = if composite.score.is_some() {
                Style::default().bold()
            } else {
                Style::default().fg(Color::Red).bold()
            };
            lines.push(Line::styled(composite.one_line.clone(), headline_style));
            lines.push(Line::from(""));
            for (axis, result) in composite.details.iter() {
                push_result(&mut lines, Some(axis), result);
                lines.push(Line::from(""));
            }
        }
    }
    lines
}

fn push_result(lines: &mut Vec<Line<'static>>, axis: Option<Axis>, result: &FormattedResult) {
    if let Some(axis) = axis {
        let style = match result.score() {
            Some(score) if guidance_for(axis).is_healthy(score) => Style::default().fg(Color::Green),
            Some(_) => Style::default().fg(Color::Yellow),
            None => Style::default().fg(Color::Red),
        };
        lines.push(Line::styled(format!("[{}]", axis.to_string().to_uppercase()), style.bold()));
    }

    match result {
        FormattedResult::Scored { one_line, explanation, suggestion, .. } => {
            lines.push(Line::from(one_line.clone()));
            lines.push(Line::from("EXPLANATION:".yellow().bold()));
            lines.push(Line::from(explanation.clone()));
            lines.push(Line::from("SUGGESTION:".yellow().bold()));
            lines.push(Line::from(suggestion.clone()));
        }
        FormattedResult::Failed { error } => {
            lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        }
    }
}
