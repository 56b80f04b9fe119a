//! Static video catalog and the sections built from it.
//!
//! DESIGN
//! ======
//! Every video is a `'static` literal. Sections borrow from [`VIDEOS`] and
//! never copy or reorder within a filter, so a category section always
//! lists its videos in catalog order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Fixed set of content categories. Declaration order is pill order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Science,
    Technology,
    History,
    Space,
    Philosophy,
    Mathematics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Science,
        Category::Technology,
        Category::History,
        Category::Space,
        Category::Philosophy,
        Category::Mathematics,
    ];

    /// Display label used on pills and section headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Technology => "Technology",
            Self::History => "History",
            Self::Space => "Space",
            Self::Philosophy => "Philosophy",
            Self::Mathematics => "Mathematics",
        }
    }

    /// Parse a display label back into a category. Case-sensitive.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Label of the pseudo-pill that stands for "no category filter".
pub const ALL_PILL_LABEL: &str = "All";

/// One mock video entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoSummary {
    pub id: u32,
    pub title: &'static str,
    pub channel: &'static str,
    pub views: &'static str,
    pub uploaded: &'static str,
    pub duration: &'static str,
    /// CSS background value painted into the thumbnail slot.
    pub thumbnail: &'static str,
    pub category: Category,
}

pub static VIDEOS: [VideoSummary; 6] = [
    VideoSummary {
        id: 1,
        title: "The Physics of Black Holes",
        channel: "Cosmos Explained",
        views: "2.4M views",
        uploaded: "3 days ago",
        duration: "18:42",
        thumbnail: "linear-gradient(135deg, #0f172a 0%, #6d28d9 100%)",
        category: Category::Space,
    },
    VideoSummary {
        id: 2,
        title: "How Transistors Actually Work",
        channel: "Circuit Theory",
        views: "890K views",
        uploaded: "1 week ago",
        duration: "24:10",
        thumbnail: "linear-gradient(135deg, #082f49 0%, #0ea5e9 100%)",
        category: Category::Technology,
    },
    VideoSummary {
        id: 3,
        title: "The Fall of Constantinople",
        channel: "History Unboxed",
        views: "1.1M views",
        uploaded: "2 weeks ago",
        duration: "32:05",
        thumbnail: "linear-gradient(135deg, #451a03 0%, #d97706 100%)",
        category: Category::History,
    },
    VideoSummary {
        id: 4,
        title: "Building a Compiler from Scratch",
        channel: "Code Foundations",
        views: "456K views",
        uploaded: "5 days ago",
        duration: "47:33",
        thumbnail: "linear-gradient(135deg, #052e16 0%, #22c55e 100%)",
        category: Category::Technology,
    },
    VideoSummary {
        id: 5,
        title: "What Is Consciousness?",
        channel: "Mind Matters",
        views: "3.2M views",
        uploaded: "1 month ago",
        duration: "21:17",
        thumbnail: "linear-gradient(135deg, #4a044e 0%, #db2777 100%)",
        category: Category::Philosophy,
    },
    VideoSummary {
        id: 6,
        title: "Mapping the Milky Way",
        channel: "Stellar Cartography",
        views: "720K views",
        uploaded: "4 days ago",
        duration: "15:58",
        thumbnail: "linear-gradient(135deg, #1e1b4b 0%, #818cf8 100%)",
        category: Category::Space,
    },
];

/// Video ids shown in the featured row, in display order.
pub const FEATURED_IDS: [u32; 3] = [5, 1, 4];

/// Which row of the landing page a section renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Trending,
    Featured,
    Category(Category),
}

impl SectionKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Trending => "Trending Now",
            Self::Featured => "Featured",
            Self::Category(c) => c.label(),
        }
    }

    /// Stable DOM-friendly key.
    #[must_use]
    pub fn key(self) -> String {
        match self {
            Self::Trending => "trending".to_owned(),
            Self::Featured => "featured".to_owned(),
            Self::Category(c) => c.label().to_ascii_lowercase(),
        }
    }
}

/// A titled row of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub videos: Vec<&'static VideoSummary>,
}

/// Videos whose category equals `category`, in catalog order.
#[must_use]
pub fn in_category(videos: &'static [VideoSummary], category: Category) -> Vec<&'static VideoSummary> {
    videos.iter().filter(|v| v.category == category).collect()
}

/// Videos matching `ids`, in the order of `ids`. Unknown ids are skipped.
#[must_use]
pub fn by_ids(videos: &'static [VideoSummary], ids: &[u32]) -> Vec<&'static VideoSummary> {
    ids.iter()
        .filter_map(|id| videos.iter().find(|v| v.id == *id))
        .collect()
}

/// Build every landing-page section from `videos`.
///
/// Trending and featured come first; then one section per category that has
/// at least one video, in [`Category::ALL`] order.
#[must_use]
pub fn sections_for(videos: &'static [VideoSummary], featured: &[u32]) -> Vec<Section> {
    let mut out = vec![
        Section { kind: SectionKind::Trending, videos: videos.iter().collect() },
        Section { kind: SectionKind::Featured, videos: by_ids(videos, featured) },
    ];
    for category in Category::ALL {
        let matching = in_category(videos, category);
        if !matching.is_empty() {
            out.push(Section { kind: SectionKind::Category(category), videos: matching });
        }
    }
    out
}

/// Sections for the built-in catalog.
#[must_use]
pub fn sections() -> Vec<Section> {
    sections_for(&VIDEOS, &FEATURED_IDS)
}
