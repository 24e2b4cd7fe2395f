//! UI rendering tests for netstream
//!
//! Renders the whole app through `TestBackend` and checks what lands in
//! the buffer at the minimum (80x24) and a large (160x48) terminal.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use netstream::ui::{player, rows};
use netstream::{ui, App, Catalog, CategoryFilter, Config, ContentId};

fn draw(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// =============================================================================
// Browse screen
// =============================================================================

#[test]
fn test_home_renders_tabs_hero_and_rows() {
    let app = App::new(Config::default());
    let screen = draw(&app, 160, 48);

    for tab in ["Home", "Movies", "TV Shows", "Live TV", "News", "Sports"] {
        assert!(screen.contains(tab), "missing tab {tab}");
    }
    assert!(screen.contains("NETSTREAM"));
    assert!(screen.contains("SERIES"));
    assert!(screen.contains("Breaking Bad"));
    assert!(screen.contains("▶ Play"));
    assert!(screen.contains("+ My List"));
    assert!(screen.contains("Trending Now"));
    assert!(screen.contains("The Dark Knight"));
    assert!(screen.contains("My List: 0"));
}

#[test]
fn test_renders_at_minimum_size() {
    let app = App::new(Config::default());
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("Breaking Bad"));
    assert!(screen.contains("Trending Now"));
}

#[test]
fn test_live_category_shows_epg() {
    let app = App::with_catalog(Catalog::builtin(), Config::default(), CategoryFilter::Live);
    let screen = draw(&app, 160, 48);

    assert!(!screen.contains("FEATURED"));
    assert!(screen.contains("Live TV"));
    assert!(screen.contains("CNN International"));
    assert!(screen.contains("CH 1"));
    assert!(screen.contains("Next: Business Report"));
}

#[test]
fn test_toast_replaces_key_hints() {
    let mut app = App::new(Config::default());
    let screen = draw(&app, 160, 48);
    assert!(screen.contains("q:quit"));

    // hero "+ My List"
    let now = Instant::now();
    app.handle_key(key(KeyCode::Right), now);
    app.handle_key(key(KeyCode::Enter), now);
    app.tick(now);
    let screen = draw(&app, 160, 48);
    assert!(screen.contains("Added to My List: Breaking Bad"));
    assert!(screen.contains("✓ My List"));
    assert!(screen.contains("My List: 1"));
}

#[test]
fn test_card_geometry_in_cells() {
    let app = App::new(Config::default());
    let row = &app.browse().rows()[0];
    assert_eq!(rows::card_cells(row), (30, 2));
}

// =============================================================================
// Player overlay
// =============================================================================

#[test]
fn test_player_overlay_while_loading() {
    let start = Instant::now();
    let mut app = App::new(Config::default());
    let item = app.catalog().get(ContentId::movie(1)).unwrap().clone();
    app.play(item, start);

    let screen = draw(&app, 120, 30);
    assert!(screen.contains("The Dark Knight"));
    assert!(screen.contains("Loading"));
    assert!(screen.contains("Fit Screen"));
    assert!(screen.contains("0:00 / 0:00"));
    assert!(screen.contains("100%"));
    // the browse chrome is gone
    assert!(!screen.contains("Trending Now"));
}

#[test]
fn test_player_overlay_after_load_and_hide() {
    let start = Instant::now();
    let mut app = App::new(Config::default());
    let item = app.catalog().get(ContentId::movie(1)).unwrap().clone();
    app.play(item, start);
    app.tick(start);

    let screen = draw(&app, 120, 30);
    assert!(screen.contains("0:00 / 152:00"));
    assert!(!screen.contains("Loading"));

    app.tick(start + Duration::from_secs(5));
    let screen = draw(&app, 120, 30);
    assert!(!screen.contains("The Dark Knight"));
    assert!(!screen.contains("152:00"));
}

#[test]
fn test_settings_panel_lists_modes() {
    let start = Instant::now();
    let mut app = App::new(Config::default());
    let item = app.catalog().get(ContentId::series(1)).unwrap().clone();
    app.play(item, start);
    app.handle_key(key(KeyCode::Char('s')), start);

    let screen = draw(&app, 120, 30);
    assert!(screen.contains("SCREEN MODE"));
    for mode in ["Fit Screen", "Fill Screen", "Stretch", "Original"] {
        assert!(screen.contains(mode), "missing mode {mode}");
    }
    assert!(screen.contains("Scale to fill, may crop edges"));
}

#[test]
fn test_progress_helpers() {
    assert_eq!(player::format_time(61.0), "1:01");
    let (filled, empty) = player::progress_bar(0.25, 8);
    assert_eq!(filled.chars().count(), 2);
    assert_eq!(empty.chars().count(), 6);
}
