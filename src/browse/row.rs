//! Horizontally scrolling content row
//!
//! Tracks which card holds remote-control focus and keeps the focused card
//! on screen by requesting scroll offsets from the row's viewport.

use serde::{Deserialize, Serialize};

use crate::models::ContentItem;

// =============================================================================
// Geometry & Auto-Scroll
// =============================================================================

/// Fixed per-row card geometry, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowGeometry {
    pub item_width: f32,
    pub spacing: f32,
}

impl Default for RowGeometry {
    fn default() -> Self {
        Self {
            item_width: 240.0,
            spacing: 16.0,
        }
    }
}

impl RowGeometry {
    /// Distance between the leading edges of two neighbouring cards
    pub fn stride(&self) -> f32 {
        self.item_width + self.spacing
    }
}

/// A request for the row viewport to scroll along its primary axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub animated: bool,
}

/// Computes scroll targets for a focused index.
///
/// One card of lead-in is kept before the focused card instead of flushing
/// it to the viewport edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoScroll {
    geometry: RowGeometry,
}

impl AutoScroll {
    pub fn new(geometry: RowGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    /// `max(0, index * stride - stride)`
    pub fn offset_for(&self, index: usize) -> f32 {
        let stride = self.geometry.stride();
        (index as f32 * stride - stride).max(0.0)
    }

    /// Smooth scroll request that brings `index` into view
    pub fn scroll_to_index(&self, index: usize) -> ScrollRequest {
        ScrollRequest {
            offset: self.offset_for(index),
            animated: true,
        }
    }
}

/// Scroll position of a row. Animated requests ease toward their target on
/// each `step`; immediate requests jump.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollViewport {
    offset: f32,
    target: f32,
}

impl ScrollViewport {
    /// Fraction of the remaining distance covered per animation step
    const EASING: f32 = 0.5;
    /// Below this distance the animation snaps to its target
    const SNAP: f32 = 1.0;

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    pub fn apply(&mut self, request: ScrollRequest) {
        self.target = request.offset.max(0.0);
        if !request.animated {
            self.offset = self.target;
        }
    }

    /// Advance the animation one frame. Returns true if the offset moved.
    pub fn step(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        let delta = self.target - self.offset;
        if delta.abs() <= Self::SNAP {
            self.offset = self.target;
        } else {
            self.offset += delta * Self::EASING;
        }
        true
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.target = 0.0;
    }
}

// =============================================================================
// Content Row
// =============================================================================

/// Which row of the browse screen this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    Trending,
    LiveChannels,
    PopularMovies,
    TvSeries,
    MyList,
    Category(crate::models::CategoryFilter),
}

impl RowId {
    pub fn title(&self) -> &'static str {
        match self {
            RowId::Trending => "Trending Now",
            RowId::LiveChannels => "Live Channels",
            RowId::PopularMovies => "Popular Movies",
            RowId::TvSeries => "TV Series",
            RowId::MyList => "My List",
            RowId::Category(category) => category.row_title(),
        }
    }
}

/// Focusable, horizontally scrollable list of content cards.
///
/// Invariant: when the row is non-empty, `focused < items.len()`. Replacing
/// the items resets focus to the first card.
#[derive(Debug, Clone)]
pub struct ContentRow {
    id: RowId,
    items: Vec<ContentItem>,
    focused: usize,
    auto_scroll: AutoScroll,
    viewport: ScrollViewport,
}

impl ContentRow {
    /// New row with the first card focused (preferred focus on mount)
    pub fn new(id: RowId, items: Vec<ContentItem>, geometry: RowGeometry) -> Self {
        Self {
            id,
            items,
            focused: 0,
            auto_scroll: AutoScroll::new(geometry),
            viewport: ScrollViewport::default(),
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.id.title()
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_item(&self) -> Option<&ContentItem> {
        self.items.get(self.focused)
    }

    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    pub fn geometry(&self) -> RowGeometry {
        self.auto_scroll.geometry()
    }

    /// Move focus to `index`. Out-of-range requests are ignored and return
    /// `None`; otherwise the viewport receives exactly one scroll request,
    /// which is also returned.
    pub fn move_focus(&mut self, index: usize) -> Option<ScrollRequest> {
        if index >= self.items.len() {
            return None;
        }
        self.focused = index;
        let request = self.auto_scroll.scroll_to_index(index);
        self.viewport.apply(request);
        Some(request)
    }

    pub fn focus_next(&mut self) -> Option<ScrollRequest> {
        self.move_focus(self.focused + 1)
    }

    pub fn focus_prev(&mut self) -> Option<ScrollRequest> {
        let index = self.focused.checked_sub(1)?;
        self.move_focus(index)
    }

    /// Focus `index` and raise a selection for the item there
    pub fn activate(&mut self, index: usize) -> Option<ContentItem> {
        self.move_focus(index)?;
        self.items.get(index).cloned()
    }

    pub fn activate_focused(&mut self) -> Option<ContentItem> {
        self.activate(self.focused)
    }

    /// Replace the row contents. Focus returns to the first card.
    pub fn set_items(&mut self, items: Vec<ContentItem>) {
        self.items = items;
        self.focused = 0;
        self.viewport.reset();
    }

    /// Advance the scroll animation. Returns true if anything moved.
    pub fn animate(&mut self) -> bool {
        self.viewport.step()
    }

    /// Index of the first card (at least partly) inside the viewport
    pub fn first_visible(&self) -> usize {
        let stride = self.geometry().stride();
        if stride <= 0.0 {
            return 0;
        }
        (self.viewport.offset() / stride).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn row(len: usize) -> ContentRow {
        let items: Vec<ContentItem> = Catalog::builtin().all().take(len).cloned().collect();
        ContentRow::new(RowId::Trending, items, RowGeometry::default())
    }

    #[test]
    fn test_reference_geometry_offsets() {
        let scroll = AutoScroll::default();
        assert_eq!(scroll.offset_for(0), 0.0);
        assert_eq!(scroll.offset_for(1), 0.0);
        assert_eq!(scroll.offset_for(2), 256.0);
        assert_eq!(scroll.offset_for(5), 1024.0);
        assert!(scroll.scroll_to_index(3).animated);
    }

    #[test]
    fn test_initial_focus_is_first_card() {
        let row = row(5);
        assert_eq!(row.focused_index(), 0);
        assert_eq!(row.focused_item().unwrap().title, "The Dark Knight");
    }

    #[test]
    fn test_move_focus_in_range() {
        let mut row = row(5);
        for index in 0..5 {
            let request = row.move_focus(index).expect("in range");
            assert_eq!(row.focused_index(), index);
            let expected = (index as f32 * 256.0 - 256.0).max(0.0);
            assert_eq!(request.offset, expected);
            assert_eq!(row.viewport().target(), expected);
        }
    }

    #[test]
    fn test_move_focus_out_of_range_is_noop() {
        let mut row = row(3);
        row.move_focus(2);
        assert!(row.move_focus(3).is_none());
        assert!(row.move_focus(usize::MAX).is_none());
        assert_eq!(row.focused_index(), 2);
    }

    #[test]
    fn test_focus_prev_at_start_is_noop() {
        let mut row = row(3);
        assert!(row.focus_prev().is_none());
        assert_eq!(row.focused_index(), 0);
        assert!(row.focus_next().is_some());
        assert_eq!(row.focused_index(), 1);
    }

    #[test]
    fn test_activate_focuses_then_selects() {
        let mut row = row(5);
        let selected = row.activate(3).unwrap();
        assert_eq!(selected.title, "The Matrix");
        assert_eq!(row.focused_index(), 3);
        assert!(row.activate(9).is_none());
        assert_eq!(row.focused_index(), 3);
    }

    #[test]
    fn test_set_items_resets_focus() {
        let mut row = row(5);
        row.move_focus(4);
        row.set_items(Catalog::builtin().live_channels().to_vec());
        assert_eq!(row.focused_index(), 0);
        assert_eq!(row.viewport().offset(), 0.0);
    }

    #[test]
    fn test_empty_row() {
        let mut row = row(0);
        assert!(row.is_empty());
        assert!(row.focused_item().is_none());
        assert!(row.move_focus(0).is_none());
        assert!(row.activate_focused().is_none());
    }

    #[test]
    fn test_viewport_eases_to_target() {
        let mut row = row(5);
        row.move_focus(4);
        assert_eq!(row.viewport().offset(), 0.0);

        let mut frames = 0;
        while row.animate() {
            frames += 1;
            assert!(frames < 100, "animation should settle");
        }
        assert_eq!(row.viewport().offset(), 768.0);
        assert_eq!(row.first_visible(), 3);
    }

    #[test]
    fn test_immediate_scroll_jumps() {
        let mut viewport = ScrollViewport::default();
        viewport.apply(ScrollRequest {
            offset: 512.0,
            animated: false,
        });
        assert_eq!(viewport.offset(), 512.0);
        assert!(!viewport.step());
    }
}
