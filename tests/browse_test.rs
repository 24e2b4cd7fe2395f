//! Browse screen tests
//!
//! Row focus and auto-scroll geometry, category switching and the
//! D-pad walk between header, hero and rows.

use netstream::browse::{ContentRow, RowGeometry, RowId, ScrollRequest};
use netstream::{BrowseAction, BrowseScreen, Catalog, CategoryFilter, FocusZone, WatchList};

fn home() -> (Catalog, WatchList, BrowseScreen) {
    let catalog = Catalog::builtin();
    let watchlist = WatchList::new();
    let screen = BrowseScreen::new(&catalog, &watchlist, CategoryFilter::All, RowGeometry::default());
    (catalog, watchlist, screen)
}

fn movie_row() -> ContentRow {
    let catalog = Catalog::builtin();
    ContentRow::new(
        RowId::PopularMovies,
        catalog.movies().to_vec(),
        RowGeometry::default(),
    )
}

// =============================================================================
// Row focus & auto-scroll
// =============================================================================

#[test]
fn test_move_focus_scrolls_one_card_behind() {
    for index in 0..5 {
        let mut row = movie_row();
        let request = row.move_focus(index);
        assert_eq!(row.focused_index(), index);

        let expected = (index as f32 * 256.0 - 256.0).max(0.0);
        assert_eq!(
            request,
            Some(ScrollRequest {
                offset: expected,
                animated: true,
            })
        );
    }
}

#[test]
fn test_move_focus_out_of_range_is_ignored() {
    let mut row = movie_row();
    row.move_focus(2);
    assert_eq!(row.move_focus(5), None);
    assert_eq!(row.move_focus(usize::MAX), None);
    assert_eq!(row.focused_index(), 2);
}

#[test]
fn test_custom_geometry_stride() {
    let geometry = RowGeometry {
        item_width: 100.0,
        spacing: 20.0,
    };
    let mut row = ContentRow::new(RowId::TvSeries, Catalog::builtin().series().to_vec(), geometry);
    assert_eq!(row.move_focus(2).map(|r| r.offset), Some(120.0));
}

#[test]
fn test_viewport_settles_on_target() {
    let mut row = movie_row();
    row.move_focus(4);
    assert_eq!(row.viewport().target(), 768.0);

    let mut steps = 0;
    while row.animate() {
        steps += 1;
        assert!(steps < 1000, "scroll animation never settled");
    }
    assert!(row.viewport().is_settled());
    assert_eq!(row.viewport().offset(), 768.0);
}

#[test]
fn test_activate_plays_and_focuses() {
    let mut row = movie_row();
    let item = row.activate(3).unwrap();
    assert_eq!(item.title, "The Matrix");
    assert_eq!(row.focused_index(), 3);
    assert!(row.activate(9).is_none());
}

// =============================================================================
// Home composition
// =============================================================================

#[test]
fn test_home_rows() {
    let (_, _, screen) = home();
    let ids: Vec<RowId> = screen.rows().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            RowId::Trending,
            RowId::LiveChannels,
            RowId::PopularMovies,
            RowId::TvSeries,
        ]
    );
    assert!(screen.shows_hero());
    assert_eq!(screen.zone(), FocusZone::Hero);
}

#[test]
fn test_my_list_row_follows_watchlist() {
    let (catalog, mut watchlist, mut screen) = home();
    watchlist.toggle(netstream::ContentId::movie(2));
    screen.refresh_watchlist(&catalog, &watchlist);

    let row = screen.row(RowId::MyList).unwrap();
    assert_eq!(row.items()[0].title, "Inception");

    watchlist.toggle(netstream::ContentId::movie(2));
    screen.refresh_watchlist(&catalog, &watchlist);
    assert!(screen.row(RowId::MyList).is_none());
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_select_sports_category() {
    let (catalog, watchlist, mut screen) = home();
    assert!(screen.select_category(CategoryFilter::Sports, &catalog, &watchlist));

    assert!(!screen.shows_hero());
    assert_eq!(screen.rows().len(), 1);
    let row = &screen.rows()[0];
    assert_eq!(row.title(), "Sports");
    let titles: Vec<&str> = row.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["ESPN Sports"]);
    assert_eq!(screen.zone(), FocusZone::Row(0));

    // same category again is a no-op
    assert!(!screen.select_category(CategoryFilter::Sports, &catalog, &watchlist));
}

#[test]
fn test_header_tab_activation_changes_category() {
    let (catalog, watchlist, mut screen) = home();
    assert!(screen.move_up());
    assert_eq!(screen.zone(), FocusZone::Header);
    assert!(screen.move_right());

    let action = screen.activate(&catalog, &watchlist);
    assert_eq!(action, Some(BrowseAction::CategoryChanged(CategoryFilter::Movies)));
    assert_eq!(screen.category(), CategoryFilter::Movies);
    // tab focus is kept on the header
    assert_eq!(screen.zone(), FocusZone::Header);
}

// =============================================================================
// D-pad walk
// =============================================================================

#[test]
fn test_vertical_walk_stops_at_edges() {
    let (_, _, mut screen) = home();
    assert!(screen.move_up());
    assert!(!screen.move_up());

    let mut zones = Vec::new();
    while screen.move_down() {
        zones.push(screen.zone());
    }
    assert_eq!(
        zones,
        vec![
            FocusZone::Hero,
            FocusZone::Row(0),
            FocusZone::Row(1),
            FocusZone::Row(2),
            FocusZone::Row(3),
        ]
    );
}

#[test]
fn test_hero_buttons() {
    let (catalog, watchlist, mut screen) = home();
    match screen.activate(&catalog, &watchlist) {
        Some(BrowseAction::Play(item)) => assert_eq!(item.title, "Breaking Bad"),
        other => panic!("Expected Play, got {:?}", other),
    }

    assert!(screen.move_right());
    assert!(!screen.move_right());
    match screen.activate(&catalog, &watchlist) {
        Some(BrowseAction::ToggleWatchList(item)) => assert_eq!(item.title, "Breaking Bad"),
        other => panic!("Expected ToggleWatchList, got {:?}", other),
    }
}

#[test]
fn test_row_activation_plays_focused_card() {
    let (catalog, watchlist, mut screen) = home();
    screen.move_down();
    screen.move_down();
    screen.move_right();

    match screen.activate(&catalog, &watchlist) {
        Some(BrowseAction::Play(item)) => assert_eq!(item.title, "ESPN Sports"),
        other => panic!("Expected Play, got {:?}", other),
    }
}
