//! Application state and core logic

use crate::config::QuizConfig;
use crate::platform::Platform;
use crate::quiz::QuestionCatalog;
use crate::shortcut::KeyPress;
use crate::state::{AppState, MenuItem, QuizMode, QuizSession, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Questions, loaded once at startup
    pub catalog: QuestionCatalog,
    /// User configuration
    pub config: QuizConfig,
    /// Where platform changes are persisted; `None` disables saving
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        catalog: QuestionCatalog,
        config: QuizConfig,
        config_path: Option<PathBuf>,
        platform: Platform,
    ) -> Self {
        let state = AppState::new(platform.is_mac());

        tracing::info!(
            "Starting with {} questions on {:?}",
            catalog.len(),
            platform
        );

        Self {
            state,
            catalog,
            config,
            config_path,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_mac(&self) -> bool {
        self.state.is_mac
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only presses are judged; releases and repeats would double count
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Index => self.handle_index_key(key)?,
            View::Test | View::Practice => self.handle_quiz_key(key),
        }

        Ok(())
    }

    /// Navigate to a view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!("Navigating to {:?}", view);
        if !view.is_quiz_view() {
            self.state.session = None;
        }
        self.state.current_view = view;
    }

    /// Handle keys in the index view
    fn handle_index_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        self.state.status_message = None;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::PageDown => self
                .state
                .scroll_down(self.catalog.len().saturating_sub(1)),
            KeyCode::PageUp => self.state.scroll_up(),
            KeyCode::Enter => {
                let item = self.state.selected_menu_item();
                self.activate(item)?;
            }
            KeyCode::Char(c) => {
                if let Some(item) = MenuItem::ALL.iter().find(|item| item.key() == c) {
                    self.activate(*item)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn activate(&mut self, item: MenuItem) -> Result<()> {
        match item {
            MenuItem::StartTest => self.start_quiz(QuizMode::Test),
            MenuItem::StartPractice => self.start_quiz(QuizMode::Practice),
            MenuItem::TogglePlatform => self.toggle_platform(),
            MenuItem::Quit => self.quit = true,
        }
        Ok(())
    }

    /// Handle keys in the test and practice views
    ///
    /// Every key except Esc is an answer attempt.
    fn handle_quiz_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.navigate(View::Index);
            return;
        }

        let Some(session) = self.state.session.as_mut() else {
            self.navigate(View::Index);
            return;
        };

        if session.is_finished() {
            let mode = session.mode;
            match key.code {
                KeyCode::Enter => self.navigate(View::Index),
                KeyCode::Char('r') => self.start_quiz(mode),
                _ => {}
            }
            return;
        }

        let press = KeyPress::from(key);
        session.answer(&press, &self.catalog, self.state.is_mac);

        if session.is_finished() {
            tracing::info!(
                "Test finished: {}/{} correct",
                session.score(),
                session.total()
            );
        }
    }

    /// Start a new test or practice session
    pub fn start_quiz(&mut self, mode: QuizMode) {
        let mut order = if self.config.shuffle_enabled() {
            self.catalog.shuffled_order(&mut rand::rng())
        } else {
            self.catalog.ordered()
        };
        if mode == QuizMode::Test {
            if let Some(limit) = self.config.question_limit {
                order.truncate(limit.max(1));
            }
        }

        tracing::info!("Starting {} with {} questions", mode.label(), order.len());
        self.state.session = Some(QuizSession::new(
            mode,
            order,
            self.config.shuffle_enabled(),
        ));
        self.navigate(match mode {
            QuizMode::Test => View::Test,
            QuizMode::Practice => View::Practice,
        });
    }

    /// Switch between Mac and Windows conventions and remember the choice
    pub fn toggle_platform(&mut self) {
        let platform = Platform::from_is_mac(self.state.is_mac).toggle();
        self.state.is_mac = platform.is_mac();
        self.config.platform = Some(platform);
        self.state.status_message = Some(format!("Now quizzing {:?} shortcuts", platform));

        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                tracing::warn!("Failed to save config to {}: {err:#}", path.display());
                self.push_error(format!("Could not save settings: {err}"));
            }
        }
    }
}
