//! Index view: menu and shortcut reference

use super::components::{render_menu_button, BUTTON_HEIGHT};
use super::widgets::render_scrolled_list;
use crate::app::App;
use crate::shortcut::format_answer_keys;
use crate::state::MenuItem;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Width of the menu column
const MENU_WIDTH: u16 = 26;

/// Draw the index view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
        .split(area);

    draw_menu(frame, columns[0], app);
    draw_reference(frame, columns[1], app);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(MenuItem::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let selected = app.state.selected_menu_item();
    for (idx, item) in MenuItem::ALL.iter().enumerate() {
        render_menu_button(
            frame,
            chunks[idx + 1],
            item.key(),
            item.label(),
            *item == selected,
        );
    }
}

/// Every question with its answer for the active platform
fn draw_reference(frame: &mut Frame, area: Rect, app: &App) {
    let is_mac = app.is_mac();
    let name_width = app
        .catalog
        .questions()
        .iter()
        .map(|q| q.name.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = app
        .catalog
        .questions()
        .iter()
        .map(|question| {
            let answer = format_answer_keys(question.answers(is_mac).patterns());
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<width$}", question.name, width = name_width)),
                Span::styled(
                    format!("  {:<8}", question.frequency),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    answer,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(
                " {} shortcuts ({}) ",
                app.state.platform_label(),
                app.catalog.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    render_scrolled_list(frame, area, list, app.state.scroll_offset);
}
