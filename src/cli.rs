//! CLI - Command Line Interface for netstream
//!
//! Read-only, scriptable views over the built-in catalog. All output is
//! JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # List what the Sports tab shows
//! netstream catalog --category sports --json
//!
//! # One record
//! netstream info movie-2
//!
//! # Launch the TUI on the Live TV tab in fill mode
//! netstream --category live --screen-mode fill
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::{CategoryFilter, ContentId, ScreenMode};

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments or unknown content id
    InvalidArgs = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// netstream - TV-style streaming front end for the terminal
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "netstream",
    version,
    author = "Gorka & Hermes",
    about = "TV-style streaming front end for the terminal",
    long_about = "Browse movies, series and live channels with a remote-control \
                  style interface and play them in a full-screen player.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  netstream                              Launch interactive TUI\n\
                  netstream catalog --category sports    List the Sports tab\n\
                  netstream info movie-2 --json          Show one record\n\
                  netstream --screen-mode fill           Start the player in fill mode"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Category tab to start on (all, movies, tvshows, live, news, sports)
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Initial screen mode for playback (fit, fill, stretch, original)
    #[arg(long)]
    pub screen_mode: Option<ScreenMode>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog items visible under a category
    #[command(visible_alias = "ls")]
    Catalog(CatalogCmd),

    /// Show one catalog record
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List the category tabs
    Categories,

    /// List the screen modes in cycle order
    ScreenModes,
}

/// List the items a category tab shows
#[derive(Args, Debug)]
pub struct CatalogCmd {
    /// Category filter (all, movies, tvshows, live, news, sports)
    #[arg(long, short = 'C', default_value = "all")]
    pub category: CategoryFilter,
}

/// Show the full record for one content id
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Content id, e.g. movie-2, series-1, live-3
    #[arg(required = true)]
    pub id: String,
}

impl InfoCmd {
    pub fn content_id(&self) -> Result<ContentId, String> {
        self.id.parse()
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// One category tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub key: String,
    pub label: String,
    pub row_title: String,
}

impl From<CategoryFilter> for CategoryEntry {
    fn from(category: CategoryFilter) -> Self {
        Self {
            key: category.key().to_string(),
            label: category.label().to_string(),
            row_title: category.row_title().to_string(),
        }
    }
}

/// One screen mode in the cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenModeEntry {
    pub key: String,
    pub name: String,
    pub description: String,
    pub next: String,
}

impl From<ScreenMode> for ScreenModeEntry {
    fn from(mode: ScreenMode) -> Self {
        Self {
            key: mode.key().to_string(),
            name: mode.name().to_string(),
            description: mode.description().to_string(),
            next: mode.next().key().to_string(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data wrapped in the JSON envelope
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print plain text lines (TTY mode)
    pub fn print_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: std::fmt::Display,
    {
        for line in lines {
            println!("{}", line);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
