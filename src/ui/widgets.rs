//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list scrolled so that item `offset` is the first one shown.
pub fn render_scrolled_list(frame: &mut Frame, area: Rect, list: List, offset: usize) {
    let mut list_state = ListState::default().with_offset(offset);
    frame.render_stateful_widget(list, area, &mut list_state);
}
