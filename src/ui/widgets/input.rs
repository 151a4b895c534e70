// src/ui/widgets/input.rs
use ratatui::{layout::Position, prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState};

/// Renders the URL input box; the title shows the selected test type.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::raw("Target URL "),
        Span::styled(format!("[{}]", app.test_type), Style::default().fg(Color::Cyan).bold()),
    ]);
    let input_block = Block::default().borders(Borders::ALL).title(title);
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only when in the Idle state.
    if let AppState::Idle = app.state {
        if !app.show_disclaimer {
            frame.set_cursor_position(Position::new(
                area.x + app.input.chars().count() as u16 + 1,
                area.y + 1,
            ));
        }
    }
}
