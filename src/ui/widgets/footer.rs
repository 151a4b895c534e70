// src/ui/widgets/footer.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.show_disclaimer {
        Line::from(vec![Span::raw("Press "), key("Enter"), Span::raw(" to acknowledge.")])
    } else {
        match app.state {
            AppState::Idle => Line::from(vec![
                key("Enter"),
                Span::raw(" assess, "),
                key("Tab"),
                Span::raw(" test type, "),
                key("F2"),
                Span::raw(" logs, "),
                key("Esc"),
                Span::raw(" quit."),
            ]),
            AppState::Finished => Line::from(vec![
                key("[N]"),
                Span::raw("ew assessment, "),
                key("[L]"),
                Span::raw("ogs, "),
                key("↑ ↓"),
                Span::raw(" scroll, "),
                key("[Q]"),
                Span::raw("uit"),
            ]),
            AppState::Scanning => Line::from("Assessing... Press Q to quit."),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
