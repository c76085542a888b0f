//! Terminal setup and teardown

use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Raw-mode terminal that is restored when dropped
///
/// When the terminal supports the kitty keyboard protocol, modifier-only key
/// presses are requested too, so a held Ctrl can be judged on its own.
pub struct TerminalGuard {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        with_rollback(Self::setup, || {
            if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
                tracing::warn!("Failed to leave alternate screen: {err}");
            }
            if let Err(err) = disable_raw_mode() {
                tracing::warn!("Failed to disable raw mode: {err}");
            }
        })
    }

    /// Everything after raw mode; raw mode is undone by the caller on error
    fn setup() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )?;
        }
        tracing::debug!("Keyboard enhancement enabled: {keyboard_enhanced}");

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            keyboard_enhanced,
        })
    }

    fn restore(&mut self) -> Result<()> {
        if self.keyboard_enhanced {
            execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!("Failed to restore terminal: {err:#}");
        }
    }
}

/// Run `setup`, calling `rollback` if it fails
fn with_rollback<T>(setup: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        rollback();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_rollback_runs_when_setup_fails() {
        let rolled_back = Cell::new(false);
        let result: Result<()> = with_rollback(
            || Err(anyhow!("no alternate screen")),
            || rolled_back.set(true),
        );
        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn test_rollback_skipped_when_setup_succeeds() {
        let rolled_back = Cell::new(false);
        let result = with_rollback(|| Ok(7), || rolled_back.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }
}
