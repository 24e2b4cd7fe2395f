//! App state and core application logic
//!
//! Owns the catalog, the watch list, the browse screen and the player, and
//! routes remote-control keys to whichever of them holds focus.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::browse::{BrowseAction, BrowseScreen};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{CategoryFilter, ContentItem};
use crate::playback::{PlatformShell, Player, SimulatedPlayer, TerminalShell};
use crate::watchlist::{ToggleOutcome, WatchList};

/// Player type driven by the terminal front end
pub type TuiPlayer = Player<SimulatedPlayer, TerminalShell>;

// =============================================================================
// App State Enum
// =============================================================================

/// Which screen has the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Hero, category tabs and content rows
    #[default]
    Browse,
    /// Full-screen player overlay
    Playing,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    config: Config,
    catalog: Catalog,
    watchlist: WatchList,
    browse: BrowseScreen,
    player: TuiPlayer,
}

impl App {
    /// Create an app over the built-in catalog, starting on the home tab
    pub fn new(config: Config) -> Self {
        Self::with_catalog(Catalog::builtin(), config, CategoryFilter::All)
    }

    pub fn with_catalog(catalog: Catalog, config: Config, category: CategoryFilter) -> Self {
        let watchlist = WatchList::new();
        let browse = BrowseScreen::new(&catalog, &watchlist, category, config.row);
        let player = Player::new(
            SimulatedPlayer::new(config.player.sample_duration_secs),
            TerminalShell::new(config.ui.toast_ttl()),
            config.player.clone(),
        );
        Self {
            running: true,
            config,
            catalog,
            watchlist,
            browse,
            player,
        }
    }

    pub fn state(&self) -> AppState {
        if self.player.is_open() {
            AppState::Playing
        } else {
            AppState::Browse
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn watchlist(&self) -> &WatchList {
        &self.watchlist
    }

    pub fn browse(&self) -> &BrowseScreen {
        &self.browse
    }

    pub fn player(&self) -> &TuiPlayer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut TuiPlayer {
        &mut self.player
    }

    /// Toast currently on the status line
    pub fn toast(&self) -> Option<&str> {
        self.player.shell().toast()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Hardware back. Returns false when nothing consumed it.
    pub fn back(&mut self, now: Instant) -> bool {
        self.player.back(now)
    }

    pub fn play(&mut self, item: ContentItem, now: Instant) {
        self.player.open(item, now);
    }

    pub fn toggle_watchlist(&mut self, item: &ContentItem) -> ToggleOutcome {
        let outcome = self.watchlist.toggle(item.id);
        self.player
            .shell_mut()
            .show_notification(&outcome.notification(&item.title));
        self.browse.refresh_watchlist(&self.catalog, &self.watchlist);
        outcome
    }

    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        let changed = self
            .browse
            .select_category(category, &self.catalog, &self.watchlist);
        if changed {
            info!(category = category.key(), "category changed");
        }
        changed
    }

    /// Advance timers, drain provider notifications and step animations.
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let toast_before = self.toast().map(str::to_owned);
        let player = self.player.tick(now);
        self.player.shell_mut().tick(now);
        let animated = self.browse.animate();
        player.changed() || animated || self.toast() != toast_before.as_deref()
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Global quit shortcut (Ctrl+C or q)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }
        if key.code == KeyCode::Char('q') {
            self.quit();
            return true;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            return self.back(now);
        }

        match self.state() {
            AppState::Browse => self.handle_browse_key(key, now),
            AppState::Playing => self.handle_player_key(key, now),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.browse.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.browse.move_down(),
            KeyCode::Left | KeyCode::Char('h') => self.browse.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.browse.move_right(),
            KeyCode::Enter => {
                match self.browse.activate(&self.catalog, &self.watchlist) {
                    Some(BrowseAction::Play(item)) => self.play(item, now),
                    Some(BrowseAction::ToggleWatchList(item)) => {
                        self.toggle_watchlist(&item);
                    }
                    Some(BrowseAction::CategoryChanged(category)) => {
                        info!(category = category.key(), "category changed");
                    }
                    None => return false,
                }
                true
            }
            KeyCode::Char('m') => match self.browse.focused_item(&self.catalog) {
                Some(item) => {
                    self.toggle_watchlist(&item);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn handle_player_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some((settings_open, controls_visible)) = self
            .player
            .session()
            .map(|s| (s.settings_visible(), s.controls_visible()))
        else {
            return false;
        };

        if settings_open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.player.move_settings_cursor(false, now),
                KeyCode::Down | KeyCode::Char('j') => self.player.move_settings_cursor(true, now),
                KeyCode::Enter => self.player.apply_settings_cursor(now),
                KeyCode::Char('s') => self.player.toggle_settings(now),
                _ => {
                    self.player.reveal_controls(now);
                }
            }
            return true;
        }

        // A hidden overlay swallows the first press and just reappears
        if !controls_visible {
            self.player.reveal_controls(now);
            return true;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.player.move_control_focus(false, now),
            KeyCode::Right | KeyCode::Char('l') => self.player.move_control_focus(true, now),
            KeyCode::Enter => self.player.activate_control(now),
            KeyCode::Char(' ') | KeyCode::Char('p') => self.player.toggle_play_pause(now),
            KeyCode::Char(',') | KeyCode::Char('<') => self.player.seek_backward(now),
            KeyCode::Char('.') | KeyCode::Char('>') => self.player.seek_forward(now),
            KeyCode::Char('+') | KeyCode::Char('=') => self.player.volume_up(now),
            KeyCode::Char('-') => self.player.volume_down(now),
            KeyCode::Char('v') => self.player.cycle_screen_mode(now),
            KeyCode::Char('s') => self.player.toggle_settings(now),
            _ => {
                self.player.reveal_controls(now);
            }
        }
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::FocusZone;
    use crate::playback::PlaybackState;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_starts_on_browse() {
        let app = App::new(Config::default());
        assert!(app.running);
        assert_eq!(app.state(), AppState::Browse);
        assert_eq!(app.browse().zone(), FocusZone::Hero);
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Char('q')), now);
        assert!(!app.running);

        let mut app = App::new(Config::default());
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert!(!app.running);
    }

    #[test]
    fn test_back_on_browse_is_not_consumed() {
        let mut app = App::new(Config::default());
        assert!(!app.handle_key(key(KeyCode::Esc), Instant::now()));
        assert!(app.running);
    }

    #[test]
    fn test_enter_on_hero_plays_featured() {
        let now = Instant::now();
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.state(), AppState::Playing);
        assert_eq!(app.player().state(), PlaybackState::Loading);
        assert!(app.player().shell().status_bar_hidden());

        app.tick(now);
        assert_eq!(app.toast(), Some("Playing: Breaking Bad"));
    }

    #[test]
    fn test_hidden_controls_swallow_first_key() {
        let t0 = Instant::now();
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Enter), t0);
        app.tick(t0);
        app.tick(t0 + Duration::from_secs(5));
        let session = app.player().session().unwrap();
        assert!(!session.controls_visible());
        let volume = session.volume();

        app.handle_key(key(KeyCode::Char('-')), t0 + Duration::from_secs(6));
        let session = app.player().session().unwrap();
        assert!(session.controls_visible());
        assert_eq!(session.volume(), volume);
    }

    #[test]
    fn test_m_toggles_focused_item() {
        let now = Instant::now();
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Char('m')), now);
        assert!(app.watchlist().contains(app.catalog().featured().item.id));
        app.handle_key(key(KeyCode::Char('m')), now);
        assert!(app.watchlist().is_empty());
    }
}
