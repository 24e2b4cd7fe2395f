//! Header category tabs

use tracing::debug;

use crate::models::CategoryFilter;

/// Active category plus remote focus over the tab buttons
#[derive(Debug, Clone)]
pub struct CategorySelector {
    tabs: Vec<CategoryFilter>,
    active: CategoryFilter,
    focused: usize,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self {
            tabs: CategoryFilter::ALL.to_vec(),
            active: CategoryFilter::All,
            focused: 0,
        }
    }
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on `active`, with its tab focused
    pub fn with_active(active: CategoryFilter) -> Self {
        let mut selector = Self::default();
        selector.active = active;
        selector.focused = selector.index_of(active).unwrap_or(0);
        selector
    }

    pub fn tabs(&self) -> &[CategoryFilter] {
        &self.tabs
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_tab(&self) -> CategoryFilter {
        self.tabs[self.focused]
    }

    fn index_of(&self, category: CategoryFilter) -> Option<usize> {
        self.tabs.iter().position(|tab| *tab == category)
    }

    /// Replace the active filter. Returns true if it changed; reselecting the
    /// current filter leaves everything as it was.
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        if self.active == category {
            return false;
        }
        debug!(from = %self.active.key(), to = %category.key(), "category selected");
        self.active = category;
        true
    }

    /// Move tab focus. Out-of-range indices are ignored.
    pub fn focus_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.focused = index;
        true
    }

    pub fn focus_next(&mut self) -> bool {
        self.focus_tab(self.focused + 1)
    }

    pub fn focus_prev(&mut self) -> bool {
        match self.focused.checked_sub(1) {
            Some(index) => self.focus_tab(index),
            None => false,
        }
    }

    /// Press a tab: focus it and make its category active
    pub fn press(&mut self, index: usize) -> bool {
        if !self.focus_tab(index) {
            return false;
        }
        self.select_category(self.tabs[index])
    }

    pub fn press_focused(&mut self) -> bool {
        self.press(self.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let selector = CategorySelector::new();
        assert_eq!(selector.active(), CategoryFilter::All);
        assert_eq!(selector.focused_index(), 0);
        assert_eq!(selector.tabs().len(), 6);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selector = CategorySelector::new();
        assert!(selector.select_category(CategoryFilter::Sports));
        assert!(!selector.select_category(CategoryFilter::Sports));
        assert_eq!(selector.active(), CategoryFilter::Sports);
        // focus is independent of the active filter
        assert_eq!(selector.focused_index(), 0);
    }

    #[test]
    fn test_tab_focus_bounds() {
        let mut selector = CategorySelector::new();
        assert!(!selector.focus_prev());
        for _ in 0..10 {
            selector.focus_next();
        }
        assert_eq!(selector.focused_index(), 5);
        assert!(!selector.focus_tab(6));
        assert_eq!(selector.focused_tab(), CategoryFilter::Sports);
    }

    #[test]
    fn test_press_focuses_and_selects() {
        let mut selector = CategorySelector::new();
        assert!(selector.press(2));
        assert_eq!(selector.focused_index(), 2);
        assert_eq!(selector.active(), CategoryFilter::Series);
        assert!(!selector.press(2));
        assert!(!selector.press(42));
        assert_eq!(selector.active(), CategoryFilter::Series);
    }

    #[test]
    fn test_with_active_focuses_its_tab() {
        let selector = CategorySelector::with_active(CategoryFilter::Live);
        assert_eq!(selector.active(), CategoryFilter::Live);
        assert_eq!(selector.focused_index(), 3);
    }
}
