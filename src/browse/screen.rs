//! Browse screen composition
//!
//! Owns the header tabs, the hero banner and the content rows for the
//! active category, and routes D-pad navigation between them.

use tracing::debug;

use super::category::CategorySelector;
use super::hero::{HeroBanner, HeroButton};
use super::row::{ContentRow, RowGeometry, RowId};
use crate::catalog::Catalog;
use crate::models::{CategoryFilter, ContentItem};
use crate::watchlist::WatchList;

/// Which part of the browse screen holds remote focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    Header,
    Hero,
    Row(usize),
}

/// User intent raised by the browse screen for its owner
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    Play(ContentItem),
    ToggleWatchList(ContentItem),
    CategoryChanged(CategoryFilter),
}

#[derive(Debug, Clone)]
pub struct BrowseScreen {
    geometry: RowGeometry,
    selector: CategorySelector,
    hero: HeroBanner,
    rows: Vec<ContentRow>,
    zone: FocusZone,
}

impl BrowseScreen {
    pub fn new(
        catalog: &Catalog,
        watchlist: &WatchList,
        category: CategoryFilter,
        geometry: RowGeometry,
    ) -> Self {
        let mut screen = Self {
            geometry,
            selector: CategorySelector::with_active(category),
            hero: HeroBanner::new(),
            rows: Vec::new(),
            zone: FocusZone::Header,
        };
        screen.rebuild(catalog, watchlist);
        screen.zone = screen.first_content_zone();
        screen
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    pub fn hero(&self) -> &HeroBanner {
        &self.hero
    }

    pub fn rows(&self) -> &[ContentRow] {
        &self.rows
    }

    pub fn zone(&self) -> FocusZone {
        self.zone
    }

    pub fn category(&self) -> CategoryFilter {
        self.selector.active()
    }

    /// The hero banner is only part of the home composition
    pub fn shows_hero(&self) -> bool {
        self.category() == CategoryFilter::All
    }

    pub fn row(&self, id: RowId) -> Option<&ContentRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    fn first_content_zone(&self) -> FocusZone {
        if self.shows_hero() {
            FocusZone::Hero
        } else if !self.rows.is_empty() {
            FocusZone::Row(0)
        } else {
            FocusZone::Header
        }
    }

    fn build_rows(&self, catalog: &Catalog, watchlist: &WatchList) -> Vec<ContentRow> {
        let row = |id: RowId, items: Vec<ContentItem>| ContentRow::new(id, items, self.geometry);

        match self.category() {
            CategoryFilter::All => {
                let mut rows = vec![
                    row(RowId::Trending, catalog.trending()),
                    row(RowId::LiveChannels, catalog.live_channels().to_vec()),
                    row(RowId::PopularMovies, catalog.movies().to_vec()),
                    row(RowId::TvSeries, catalog.series().to_vec()),
                ];
                if !watchlist.is_empty() {
                    rows.push(row(RowId::MyList, watchlist.list_content(catalog)));
                }
                rows
            }
            category => vec![row(RowId::Category(category), catalog.filter(category))],
        }
    }

    fn rebuild(&mut self, catalog: &Catalog, watchlist: &WatchList) {
        self.rows = self.build_rows(catalog, watchlist);
        self.hero = HeroBanner::new();
    }

    /// Switch category. Rows are rebuilt with focus back on their first card;
    /// tab focus stays where it is.
    pub fn select_category(
        &mut self,
        category: CategoryFilter,
        catalog: &Catalog,
        watchlist: &WatchList,
    ) -> bool {
        if !self.selector.select_category(category) {
            return false;
        }
        self.rebuild(catalog, watchlist);
        if self.zone != FocusZone::Header {
            self.zone = self.first_content_zone();
        }
        debug!(category = category.key(), rows = self.rows.len(), "browse rows rebuilt");
        true
    }

    /// Bring the "My List" row in line with the watch list
    pub fn refresh_watchlist(&mut self, catalog: &Catalog, watchlist: &WatchList) {
        if !self.shows_hero() {
            return;
        }

        let position = self.rows.iter().position(|row| row.id() == RowId::MyList);
        match (position, watchlist.is_empty()) {
            (Some(index), true) => {
                self.rows.remove(index);
                if self.zone == FocusZone::Row(index) {
                    self.zone = match index.checked_sub(1) {
                        Some(prev) => FocusZone::Row(prev),
                        None => self.first_content_zone(),
                    };
                }
            }
            (Some(index), false) => {
                self.rows[index].set_items(watchlist.list_content(catalog));
            }
            (None, false) => {
                self.rows.push(ContentRow::new(
                    RowId::MyList,
                    watchlist.list_content(catalog),
                    self.geometry,
                ));
            }
            (None, true) => {}
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Ordered list of vertical focus stops
    fn stops(&self) -> Vec<FocusZone> {
        let mut stops = vec![FocusZone::Header];
        if self.shows_hero() {
            stops.push(FocusZone::Hero);
        }
        stops.extend((0..self.rows.len()).map(FocusZone::Row));
        stops
    }

    fn move_vertical(&mut self, down: bool) -> bool {
        let stops = self.stops();
        let Some(current) = stops.iter().position(|zone| *zone == self.zone) else {
            self.zone = FocusZone::Header;
            return true;
        };
        let next = if down {
            current + 1
        } else {
            match current.checked_sub(1) {
                Some(prev) => prev,
                None => return false,
            }
        };
        match stops.get(next) {
            Some(zone) => {
                self.zone = *zone;
                true
            }
            None => false,
        }
    }

    pub fn move_up(&mut self) -> bool {
        self.move_vertical(false)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_vertical(true)
    }

    pub fn move_left(&mut self) -> bool {
        match self.zone {
            FocusZone::Header => self.selector.focus_prev(),
            FocusZone::Hero => self.hero.focus_prev(),
            FocusZone::Row(index) => self
                .rows
                .get_mut(index)
                .and_then(|row| row.focus_prev())
                .is_some(),
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.zone {
            FocusZone::Header => self.selector.focus_next(),
            FocusZone::Hero => self.hero.focus_next(),
            FocusZone::Row(index) => self
                .rows
                .get_mut(index)
                .and_then(|row| row.focus_next())
                .is_some(),
        }
    }

    /// OK/Select on whatever holds focus
    pub fn activate(&mut self, catalog: &Catalog, watchlist: &WatchList) -> Option<BrowseAction> {
        match self.zone {
            FocusZone::Header => {
                let category = self.selector.focused_tab();
                self.select_category(category, catalog, watchlist)
                    .then_some(BrowseAction::CategoryChanged(category))
            }
            FocusZone::Hero => {
                let item = catalog.featured().item.clone();
                Some(match self.hero.focused() {
                    HeroButton::Play => BrowseAction::Play(item),
                    HeroButton::AddToList => BrowseAction::ToggleWatchList(item),
                })
            }
            FocusZone::Row(index) => self
                .rows
                .get_mut(index)
                .and_then(|row| row.activate_focused())
                .map(BrowseAction::Play),
        }
    }

    /// Item the "add to list" shortcut applies to
    pub fn focused_item(&self, catalog: &Catalog) -> Option<ContentItem> {
        match self.zone {
            FocusZone::Header => None,
            FocusZone::Hero => Some(catalog.featured().item.clone()),
            FocusZone::Row(index) => self
                .rows
                .get(index)
                .and_then(|row| row.focused_item())
                .cloned(),
        }
    }

    /// Step every row's scroll animation
    pub fn animate(&mut self) -> bool {
        self.rows
            .iter_mut()
            .fold(false, |moved, row| row.animate() || moved)
    }
}
