//! netstream - TV-style streaming front end for the terminal
//!
//! A remote-control driven interface for browsing movies, series and live
//! channels, with a full-screen player whose controls auto-hide.
//!
//! # Modules
//!
//! - `models` - Content records, ids, categories and screen modes
//! - `catalog` - The built-in content catalog
//! - `browse` - Category tabs, hero banner and focusable content rows
//! - `watchlist` - The in-memory "My List" set
//! - `playback` - Playback sessions, timers, provider and platform seams
//! - `config` - TOML configuration
//! - `cli` / `commands` - Scriptable subcommands
//! - `ui` - TUI rendering
//! - `app` - Application state and key dispatch

pub mod app;
pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod playback;
pub mod ui;
pub mod watchlist;

// Re-export commonly used types
pub use models::{
    CategoryFilter, ContentDetails, ContentId, ContentItem, ContentKind, Epg, FeaturedContent,
    ResizeMode, ScreenMode,
};

pub use app::{App, AppState, TuiPlayer};
pub use browse::{BrowseAction, BrowseScreen, FocusZone, RowGeometry, RowId};
pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError, PlayerConfig, UiConfig};
pub use playback::{
    PlaybackError, PlaybackProvider, PlaybackSession, PlaybackState, PlatformShell, Player,
    SimulatedPlayer, TerminalShell,
};
pub use watchlist::{ToggleOutcome, WatchList};
