//! netstream - TV-style streaming front end for the terminal
//!
//! Browse a catalog of movies, series and live channels with a
//! remote-control style interface, then play them full screen.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! netstream
//!
//! # CLI mode (for automation)
//! netstream catalog --category live
//! netstream info series-1 --json
//! netstream screen-modes
//! ```

use std::fs::OpenOptions;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use netstream::cli::{Cli, Command, ExitCode, Output};
use netstream::{commands, ui, App, Catalog, CategoryFilter, Config};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Env var holding the log filter, e.g. `NETSTREAM_LOG=netstream=debug`
const LOG_ENV: &str = "NETSTREAM_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.is_cli_mode());

    let mut config = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                let output = Output::new(&cli);
                let code = output.error(e.to_string(), ExitCode::Error);
                std::process::exit(code.into());
            }
        },
        None => Config::load(),
    };
    if let Some(mode) = cli.screen_mode {
        config.player.initial_screen_mode = mode;
    }

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli);
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        let category = cli.category.unwrap_or_default();
        run_tui(config, category).await
    }
}

// =============================================================================
// Logging
// =============================================================================

fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("netstream").join("netstream.log"))
}

/// Install the tracing subscriber. Failure only costs us the logs.
fn init_logging(cli_mode: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if cli_mode {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return;
    }

    // The alternate screen owns stdout/stderr in TUI mode
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

// =============================================================================
// CLI Mode
// =============================================================================

/// Run CLI command and return exit code
fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let catalog = Catalog::builtin();

    match cli.command {
        Some(Command::Catalog(cmd)) => commands::catalog_cmd(cmd, &catalog, &output),

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &catalog, &output),

        Some(Command::Categories) => commands::categories_cmd(&output),

        Some(Command::ScreenModes) => commands::screen_modes_cmd(&output),

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: Config, category: CategoryFilter) -> Result<()> {
    info!(category = category.key(), "starting TUI");
    let mut terminal = init_terminal()?;

    let mut app = App::with_catalog(Catalog::builtin(), config, category);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    if let Err(e) = restore_terminal(&mut terminal) {
        warn!(error = %e, "failed to restore terminal");
        return Err(e);
    }
    info!("TUI closed");

    result
}

/// Main event loop - handles input, fires timers, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let tick_rate = app.config().ui.tick_rate();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout so timers keep firing while idle
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}
