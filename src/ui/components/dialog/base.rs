//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for both the title and the border
    pub color: Color,
    pub message: &'a str,
    /// Hint line at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let inner_width = config.max_width.saturating_sub(4).max(1) as usize;

    // Approximate the wrapped height; Paragraph does the real wrapping
    let message_rows: usize = config
        .message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(inner_width).max(1))
        .sum();
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (message_rows as u16 + hint_rows + 4).min(area.height);
    let width = config.max_width.min(area.width);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut content: Vec<Line> = config.message.split('\n').map(Line::from).collect();
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", config.title),
                    Style::default()
                        .fg(config.color)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}
