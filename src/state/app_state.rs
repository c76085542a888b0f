//! Application state definitions

use super::session::QuizSession;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Menu and shortcut reference
    #[default]
    Index,
    Test,
    Practice,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Index => "Shortcuts",
            Self::Test => "Test",
            Self::Practice => "Practice",
        }
    }

    pub fn is_quiz_view(&self) -> bool {
        matches!(self, Self::Test | Self::Practice)
    }
}

/// Entries of the index menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartTest,
    StartPractice,
    TogglePlatform,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        Self::StartTest,
        Self::StartPractice,
        Self::TogglePlatform,
        Self::Quit,
    ];

    /// Key that activates the entry from the index view
    pub fn key(&self) -> char {
        match self {
            Self::StartTest => 't',
            Self::StartPractice => 'p',
            Self::TogglePlatform => 'm',
            Self::Quit => 'q',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartTest => "Start test",
            Self::StartPractice => "Practice",
            Self::TogglePlatform => "Switch platform",
            Self::Quit => "Quit",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Index view
    pub menu_index: usize,
    pub scroll_offset: usize,

    // Quiz
    pub session: Option<QuizSession>,
    pub is_mac: bool,

    // UI state
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(is_mac: bool) -> Self {
        Self {
            is_mac,
            ..Default::default()
        }
    }

    /// Move menu selection down
    pub fn move_selection_down(&mut self) {
        if self.menu_index + 1 < MenuItem::ALL.len() {
            self.menu_index += 1;
        }
    }

    /// Move menu selection up
    pub fn move_selection_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn scroll_down(&mut self, max: usize) {
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Platform label for headers and hints
    pub fn platform_label(&self) -> &'static str {
        if self.is_mac {
            "Mac"
        } else {
            "Windows"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_index() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Index);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_menu_selection_clamps() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.menu_index, 0);

        for _ in 0..10 {
            state.move_selection_down();
        }
        assert_eq!(state.menu_index, MenuItem::ALL.len() - 1);
        assert_eq!(state.selected_menu_item(), MenuItem::Quit);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = AppState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down(1);
        state.scroll_down(1);
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_error_queue_order() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_platform_label() {
        assert_eq!(AppState::new(false).platform_label(), "Windows");
        assert_eq!(AppState::new(true).platform_label(), "Mac");
    }

    #[test]
    fn test_new_starts_on_index_without_errors() {
        let state = AppState::new(true);
        assert!(state.is_mac);
        assert_eq!(state.current_view, View::Index);
        assert!(state.session.is_none());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_quiz_views() {
        assert!(View::Test.is_quiz_view());
        assert!(View::Practice.is_quiz_view());
        assert!(!View::Index.is_quiz_view());
    }
}
