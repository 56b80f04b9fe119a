//! Landing page control state: highlighted pill, search text and active nav entry.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use model::{Category, NavItem};

/// Highlight and text state for the landing page controls.
///
/// Provided as `RwSignal<UiState>` via context. None of these fields feed
/// back into what the page renders beyond the controls themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Highlighted category pill. `None` is the "All" pill.
    pub active_category: Option<Category>,
    pub search_query: String,
    pub active_nav: NavItem,
}

impl UiState {
    pub fn select_category(&mut self, category: Option<Category>) {
        self.active_category = category;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn select_nav(&mut self, item: NavItem) {
        self.active_nav = item;
    }

    #[must_use]
    pub fn is_category_active(&self, category: Option<Category>) -> bool {
        self.active_category == category
    }

    #[must_use]
    pub fn is_nav_active(&self, item: NavItem) -> bool {
        self.active_nav == item
    }
}
