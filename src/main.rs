//! Terminal lifecycle, event loop, and cleanup for menulaunch.

mod actions;
mod app;
mod catalog;
mod config;
mod events;
mod highlight;
mod launcher;
mod matcher;
mod ranker;
mod state;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use catalog::Catalog;
use config::Config;
use events::key_to_action;

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    let catalog = Catalog::load(&config);
    if catalog.is_empty() {
        tracing::warn!("no programs found; check menu_dirs and desktop_dirs");
    }
    let mut app = App::new(config, catalog);

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}

/// Raw mode plus alternate screen; undone again if any step after raw mode fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let entered = (|| -> Result<_> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    })();
    or_restore(entered, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `restore` when `result` is an error, then pass the result through.
fn or_restore<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Structured logging to a file; `RUST_LOG` controls the filter.
fn init_logging(config: &Config) -> Result<()> {
    let path = config.log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("menulaunch=info".parse()?))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// One key at a time: dispatch, re-render, wait for the next.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = key_to_action(&key) {
                app.dispatch(action);
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}
