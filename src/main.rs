//! Shortcut Quiz - keyboard shortcut practice in the terminal
//!
//! Asks for a shortcut ("Bold text"), listens for the key combination and
//! judges it against the Mac or Windows answer.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use shortcut_quiz::app::App;
use shortcut_quiz::config::QuizConfig;
use shortcut_quiz::platform::{resolve_platform, HostPlatform, Platform};
use shortcut_quiz::quiz::QuestionCatalog;
use shortcut_quiz::ui::{self, TerminalGuard};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "shortcut-quiz")]
#[command(about = "Practice keyboard shortcuts for Mac and Windows")]
struct Args {
    /// Keyboard convention to quiz on (detected when omitted)
    #[arg(long, value_enum)]
    platform: Option<Platform>,

    /// JSON file with questions to use instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Ask questions in file order
    #[arg(long)]
    no_shuffle: bool,

    /// Log level when RUST_LOG is unset (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("shortcut_quiz={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (mut config, config_path) = QuizConfig::load_for_saving(QuizConfig::config_path());
    if args.no_shuffle {
        config.shuffle = Some(false);
    }

    let catalog = match args.questions.as_ref().or(config.questions_path.as_ref()) {
        Some(path) => QuestionCatalog::from_path(path)
            .with_context(|| format!("could not load questions from {}", path.display()))?,
        None => QuestionCatalog::builtin()?,
    };

    let platform = resolve_platform(args.platform, config.platform, &HostPlatform);
    let mut app = App::new(catalog, config, config_path, platform);

    // Terminal is restored when the guard drops, also on error
    let result = {
        let mut guard = TerminalGuard::enter()?;
        run_app(&mut guard.terminal, &mut app)
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
