//! Rage Cycles Contact - terminal contact form for Rage Cycles
//!
//! A Ratatui-based form that validates contact details as they are typed
//! and relays the message to the shop through a third-party form service.

mod app;
mod config;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::ContactConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Event poll interval; also how often a finished relay call is picked up
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rage_cycles_contact=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer())
                .with_ansi(false),
        )
        .init();

    let config = ContactConfig::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log sink: the log file when it can be opened, otherwise nowhere.
/// Stderr shares the terminal with the alternate screen, so it is never used.
fn log_writer() -> BoxMakeWriter {
    match ContactConfig::log_path().and_then(|path| open_log_file(&path)) {
        Some(file) => BoxMakeWriter::new(Arc::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Hours can change while the app is open
        app.state.refresh_hours();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Pick up the relay result once the background call is done
        if let Some(outcome) = app.poll_submission().await {
            tracing::debug!(?outcome, "submission finished");
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("rage-cycles-log-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("contact.log");

        let mut file = open_log_file(&path).expect("log file opens");
        writeln!(file, "first").unwrap();
        drop(file);

        // Reopening appends instead of truncating
        let mut file = open_log_file(&path).expect("log file reopens");
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_fails_quietly() {
        let dir = std::env::temp_dir().join(format!("rage-cycles-log-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        // A directory cannot be opened as the log file
        assert!(open_log_file(&dir).is_none());
        fs::remove_dir_all(&dir).unwrap();
    }
}
