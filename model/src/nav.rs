//! Sidebar navigation entries.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Fixed sidebar navigation set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavItem {
    #[default]
    Home,
    Explore,
    Subscriptions,
    Library,
    History,
    WatchLater,
}

impl NavItem {
    pub const ALL: [NavItem; 6] = [
        NavItem::Home,
        NavItem::Explore,
        NavItem::Subscriptions,
        NavItem::Library,
        NavItem::History,
        NavItem::WatchLater,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Subscriptions => "Subscriptions",
            Self::Library => "Library",
            Self::History => "History",
            Self::WatchLater => "Watch Later",
        }
    }

    /// SVG path data for the 24x24 sidebar icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "M3 11l9-8 9 8v10a1 1 0 0 1-1 1h-5v-7H9v7H4a1 1 0 0 1-1-1z",
            Self::Explore => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm4 6-2.5 5.5L8 16l2.5-5.5z",
            Self::Subscriptions => "M4 6h16M6 3h12M3 9h18v12H3zm7 3v6l5-3z",
            Self::Library => "M4 4h4v16H4zm6 0h4v16h-4zm6.5 1 3.9 15-3.9 1L12.6 6z",
            Self::History => "M12 8v5l3 2M3 12a9 9 0 1 0 3-6.7L3 8m0-5v5h5",
            Self::WatchLater => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 5v5l4 2",
        }
    }
}
