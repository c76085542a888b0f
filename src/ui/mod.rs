//! UI module for rendering the TUI

mod components;
mod index;
mod layout;
mod quiz;
mod terminal;
mod widgets;

pub use terminal::TerminalGuard;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Index => index::draw(frame, main_area, app),
        View::Test | View::Practice => quiz::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
