//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the view title and active platform
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Shortcut Quiz ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.state.platform_label(), Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current view
fn hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Index => "↑/↓: select | Enter: open | t: test | p: practice | m: platform | q: quit",
        View::Test | View::Practice => {
            let finished = app
                .state
                .session
                .as_ref()
                .map(|s| s.is_finished())
                .unwrap_or(false);
            if finished {
                "Enter: back | r: retry | Esc: back"
            } else {
                "Press the shortcut | Esc: back"
            }
        }
    }
}

/// Draw the status bar at the bottom
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            format!(" {}", hints(app)),
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
