//! End-to-end flow tests for netstream
//!
//! Drives `App` with crossterm key events and injected instants, from the
//! browse screen through playback and back.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use netstream::{
    App, AppState, Catalog, CategoryFilter, Config, ContentId, FocusZone, PlaybackState, RowId,
    ScreenMode,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, codes: &[KeyCode], now: Instant) {
    for code in codes {
        app.handle_key(key(*code), now);
    }
}

fn at(start: Instant, secs: f64) -> Instant {
    start + Duration::from_secs_f64(secs)
}

fn title(app: &App) -> Option<String> {
    app.player().session().map(|s| s.content().title.clone())
}

// =============================================================================
// Browse -> Play -> Back
// =============================================================================

#[test]
fn test_hero_play_then_back() {
    let start = Instant::now();
    let mut app = App::new(Config::default());
    assert_eq!(app.state(), AppState::Browse);

    press(&mut app, &[KeyCode::Enter], start);
    assert_eq!(app.state(), AppState::Playing);
    assert_eq!(title(&app).as_deref(), Some("Breaking Bad"));
    assert!(app.player().shell().landscape_locked());
    assert!(app.player().shell().status_bar_hidden());

    app.tick(start);
    assert_eq!(app.player().state(), PlaybackState::Playing);

    press(&mut app, &[KeyCode::Esc], at(start, 1.0));
    assert_eq!(app.state(), AppState::Browse);
    assert!(!app.player().shell().status_bar_hidden());
    assert!(!app.player().provider().is_loaded());

    // nothing left for back to dismiss
    assert!(!app.handle_key(key(KeyCode::Esc), at(start, 2.0)));
    assert!(app.running);
}

#[test]
fn test_sports_tab_to_playback() {
    let start = Instant::now();
    let mut app = App::new(Config::default());

    press(&mut app, &[KeyCode::Up], start);
    assert_eq!(app.browse().zone(), FocusZone::Header);
    press(&mut app, &[KeyCode::Right; 5], start);
    press(&mut app, &[KeyCode::Enter], start);
    assert_eq!(app.browse().category(), CategoryFilter::Sports);

    press(&mut app, &[KeyCode::Down, KeyCode::Enter], start);
    assert_eq!(title(&app).as_deref(), Some("ESPN Sports"));
}

#[test]
fn test_my_list_shortcut_adds_row() {
    let now = Instant::now();
    let mut app = App::new(Config::default());

    // Row(0) is Trending; second card is Inception
    press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Char('m')], now);
    assert!(app.watchlist().contains(ContentId::movie(2)));

    let row = app.browse().row(RowId::MyList).unwrap();
    assert_eq!(row.items()[0].title, "Inception");

    app.tick(now);
    assert_eq!(app.toast(), Some("Added to My List: Inception"));

    press(&mut app, &[KeyCode::Char('m')], now);
    assert!(app.watchlist().is_empty());
    assert!(app.browse().row(RowId::MyList).is_none());
}

// =============================================================================
// Player remote
// =============================================================================

fn playing(start: Instant) -> App {
    let mut app = App::new(Config::default());
    let item = app.catalog().get(ContentId::movie(4)).unwrap().clone();
    app.play(item, start);
    app.tick(start);
    app
}

#[test]
fn test_hidden_controls_swallow_first_press() {
    let start = Instant::now();
    let mut app = playing(start);

    app.tick(at(start, 5.0));
    assert!(!app.player().session().unwrap().controls_visible());

    press(&mut app, &[KeyCode::Char(' ')], at(start, 6.0));
    let session = app.player().session().unwrap();
    assert!(session.controls_visible());
    assert_eq!(session.state(), PlaybackState::Playing);

    press(&mut app, &[KeyCode::Char(' ')], at(start, 6.5));
    assert_eq!(app.player().state(), PlaybackState::Paused);
    assert!(app.player().provider().is_paused());
}

#[test]
fn test_control_bar_navigation() {
    let start = Instant::now();
    let mut app = playing(start);

    // PlayPause, Rewind, Forward, ScreenMode
    press(&mut app, &[KeyCode::Right; 3], start);
    press(&mut app, &[KeyCode::Enter], start);
    assert_eq!(app.player().session().unwrap().screen_mode(), ScreenMode::Fill);

    press(&mut app, &[KeyCode::Char('v'); 3], start);
    assert_eq!(app.player().session().unwrap().screen_mode(), ScreenMode::Fit);

    // ... VolumeDown, VolumeUp, Settings, Close
    press(&mut app, &[KeyCode::Right; 4], start);
    press(&mut app, &[KeyCode::Enter], start);
    assert_eq!(app.state(), AppState::Browse);
}

#[test]
fn test_seek_and_volume_keys() {
    let start = Instant::now();
    let mut app = playing(start);

    press(&mut app, &[KeyCode::Char('.'), KeyCode::Char('.')], start);
    assert_eq!(app.player().session().unwrap().elapsed(), 20.0);
    press(&mut app, &[KeyCode::Char(','); 5], start);
    assert_eq!(app.player().session().unwrap().elapsed(), 0.0);

    press(&mut app, &[KeyCode::Char('-'); 3], start);
    let volume = app.player().session().unwrap().volume();
    assert!((volume - 0.7).abs() < 1e-6);
    assert!((app.player().provider().volume() - 0.7).abs() < 1e-6);
}

#[test]
fn test_settings_panel_and_back() {
    let start = Instant::now();
    let mut app = playing(start);

    press(
        &mut app,
        &[KeyCode::Char('s'), KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        start,
    );
    let session = app.player().session().unwrap();
    assert_eq!(session.screen_mode(), ScreenMode::Original);
    assert!(session.settings_visible());

    press(&mut app, &[KeyCode::Esc], start);
    assert_eq!(app.state(), AppState::Playing);
    assert!(!app.player().session().unwrap().settings_visible());

    press(&mut app, &[KeyCode::Esc], start);
    assert_eq!(app.state(), AppState::Browse);
}

#[test]
fn test_stream_runs_to_the_end_and_restarts() {
    let start = Instant::now();
    let mut config = Config::default();
    config.player.sample_duration_secs = 30.0;
    let mut app = App::with_catalog(Catalog::builtin(), config, CategoryFilter::Live);

    press(&mut app, &[KeyCode::Enter], start);
    assert_eq!(title(&app).as_deref(), Some("CNN International"));
    app.tick(start);
    app.tick(at(start, 10.0));
    assert_eq!(app.player().session().unwrap().elapsed(), 10.0);

    app.tick(at(start, 31.0));
    let session = app.player().session().unwrap();
    assert_eq!(session.state(), PlaybackState::Ended);
    assert_eq!(session.elapsed(), 30.0);
    assert_eq!(session.progress_fraction(), 1.0);

    // controls hid at 5s; first press reveals, second restarts
    press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('p')], at(start, 32.0));
    let session = app.player().session().unwrap();
    assert_eq!(session.state(), PlaybackState::Playing);
    assert_eq!(session.elapsed(), 0.0);
    assert_eq!(app.player().provider().position(), Some(0.0));
}

#[test]
fn test_failed_load_reports_and_stays_open() {
    let start = Instant::now();
    let mut app = App::new(Config::default());
    let item = app.catalog().get(ContentId::series(2)).unwrap().clone();
    let url = item.media_url.clone();
    app.player_mut().provider_mut().fail_locator(url.clone());

    app.play(item, start);
    app.tick(start);
    assert_eq!(app.player().state(), PlaybackState::Ended);
    assert!(!app.player().provider().is_loaded());

    // "Playing: ..." first, then the failure
    app.tick(at(start, 2.0));
    assert_eq!(
        app.toast().map(str::to_owned),
        Some(format!("Playback failed: could not load {}", url))
    );

    // reveal, then play/pause: the failed session stays ended
    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char(' ')], at(start, 6.0));
    app.tick(at(start, 120.0));
    assert_eq!(app.state(), AppState::Playing);
    let session = app.player().session().unwrap();
    assert_eq!(session.state(), PlaybackState::Ended);
    assert!(session.is_failed());
    assert_eq!(session.elapsed(), 0.0);
}

#[test]
fn test_quit_keys() {
    let now = Instant::now();
    let mut app = App::new(Config::default());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
    assert!(!app.running);

    let mut app = playing(now);
    press(&mut app, &[KeyCode::Char('q')], now);
    assert!(!app.running);
}
