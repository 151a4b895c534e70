// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the disclaimer popup on top of the existing UI.
///
/// A centered modal explaining authorised use and the limits of the scores.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("BEFORE YOU SCAN".bold().yellow()),
        Line::from(""),
        Line::from("CIA Scanner sends live HTTP requests to the target you enter: one request per assessed axis, three for a full CIA assessment."),
        Line::from(""),
        Line::from("Only assess sites you own or are explicitly authorised to test. Repeated automated requests against third-party systems may breach their terms of service or local law."),
        Line::from(""),
        Line::from("Scores are heuristics, not an audit:"),
        Line::from("1. Confidentiality looks only at the URL scheme and six response headers."),
        Line::from("2. Integrity records a SHA-256 digest but never compares it, so tampering is not detected."),
        Line::from("3. Availability reflects a single request from this machine."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to continue".bold()),
    ]);

    let block = Block::default()
        .title("Disclaimer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 70, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A `Rect` of the given percentage size, centered in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}