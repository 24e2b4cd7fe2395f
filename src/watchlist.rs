//! "My List" watch list
//!
//! A toggleable membership set of content identifiers. It only changes
//! through explicit toggles and is never persisted.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{ContentId, ContentItem};

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// Toast text for a toggled item
    pub fn notification(&self, title: &str) -> String {
        match self {
            ToggleOutcome::Added => format!("Added to My List: {}", title),
            ToggleOutcome::Removed => format!("Removed from My List: {}", title),
        }
    }
}

/// Set of saved content ids
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    ids: HashSet<ContentId>,
}

impl WatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: ContentId) -> ToggleOutcome {
        let outcome = if self.ids.remove(&id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id);
            ToggleOutcome::Added
        };
        debug!(%id, ?outcome, size = self.ids.len(), "watch list toggled");
        outcome
    }

    pub fn contains(&self, id: ContentId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Saved items in canonical catalog order (movies, series, live)
    pub fn list_content(&self, catalog: &Catalog) -> Vec<ContentItem> {
        catalog
            .playable()
            .into_iter()
            .filter(|item| self.contains(item.id))
            .cloned()
            .collect()
    }
}
