// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the tail of the log file with a dimmed timestamp and horizontal scrolling.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app.log_content.iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // Lines look like "DATE TIME LEVEL MESSAGE"; anything else is shown as-is.
    let log_lines: Vec<Line> = app.log_content.iter().map(|line_str| {
        let mut parts = line_str.splitn(3, ' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(date), Some(time), Some(rest)) => Line::from(vec![
                Span::styled(format!("{} {}", date, time), Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" {}", rest)),
            ]),
            _ => Line::from(line_str.as_str()),
        }
    }).collect();

    // Keep the newest lines in view.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let skip = log_lines.len().saturating_sub(visible);
    let log_paragraph = Paragraph::new(log_lines)
        .scroll((skip as u16, app.log_horizontal_scroll as u16));

    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
        .thumb_symbol("■");

    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };

    frame.render_stateful_widget(
        scrollbar,
        scrollbar_area,
        &mut app.log_horizontal_scroll_state,
    );
}
