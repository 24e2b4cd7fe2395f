//! Catalog provider
//!
//! Immutable movie, series and live-channel records supplied at startup.
//! There is no update stream: the catalog is built once and only read.

use thiserror::Error;

use crate::models::{
    CategoryFilter, ContentDetails, ContentId, ContentItem, Epg, FeaturedContent,
};

const SAMPLE_VIDEO: &str = "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4";

/// Errors from catalog lookups
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("No content with id '{0}'")]
    UnknownContent(ContentId),
}

/// In-memory catalog of browsable content
#[derive(Debug, Clone)]
pub struct Catalog {
    featured: FeaturedContent,
    movies: Vec<ContentItem>,
    series: Vec<ContentItem>,
    live: Vec<ContentItem>,
}

impl Catalog {
    /// Build a catalog from explicit record lists
    pub fn from_parts(
        featured: FeaturedContent,
        movies: Vec<ContentItem>,
        series: Vec<ContentItem>,
        live: Vec<ContentItem>,
    ) -> Self {
        Self {
            featured,
            movies,
            series,
            live,
        }
    }

    /// The built-in catalog shipped with the app
    pub fn builtin() -> Self {
        Self::from_parts(builtin_featured(), builtin_movies(), builtin_series(), builtin_live())
    }

    pub fn featured(&self) -> &FeaturedContent {
        &self.featured
    }

    pub fn movies(&self) -> &[ContentItem] {
        &self.movies
    }

    pub fn series(&self) -> &[ContentItem] {
        &self.series
    }

    pub fn live_channels(&self) -> &[ContentItem] {
        &self.live
    }

    /// Merged catalog in canonical order: movies, then series, then live
    pub fn all(&self) -> impl Iterator<Item = &ContentItem> {
        self.movies.iter().chain(self.series.iter()).chain(self.live.iter())
    }

    /// Items visible under a category filter, in canonical order
    pub fn filter(&self, category: CategoryFilter) -> Vec<ContentItem> {
        self.all()
            .filter(|item| category.matches(item))
            .cloned()
            .collect()
    }

    /// "Trending Now" row: first 3 movies, first 2 series, first 2 live channels
    pub fn trending(&self) -> Vec<ContentItem> {
        self.movies
            .iter()
            .take(3)
            .chain(self.series.iter().take(2))
            .chain(self.live.iter().take(2))
            .cloned()
            .collect()
    }

    /// Every item a user can act on (merged catalog plus the featured record),
    /// ordered by kind and then by position in the catalog
    pub fn playable(&self) -> Vec<&ContentItem> {
        let mut items: Vec<&ContentItem> = self.all().collect();
        if !items.iter().any(|item| item.id == self.featured.item.id) {
            items.push(&self.featured.item);
        }
        // stable: catalog position is kept within a kind
        items.sort_by_key(|item| item.kind().rank());
        items
    }

    /// Look up an item by id (featured record included)
    pub fn get(&self, id: ContentId) -> Result<&ContentItem, CatalogError> {
        self.all()
            .chain(std::iter::once(&self.featured.item))
            .find(|item| item.id == id)
            .ok_or(CatalogError::UnknownContent(id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Built-in Records
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn movie(
    number: u32,
    title: &str,
    artwork: &str,
    year: u16,
    genre: &str,
    rating: f32,
    runtime_minutes: u32,
    description: &str,
) -> ContentItem {
    ContentItem {
        id: ContentId::movie(number),
        title: title.into(),
        artwork: artwork.into(),
        genre: genre.into(),
        description: description.into(),
        media_url: SAMPLE_VIDEO.into(),
        details: ContentDetails::Movie {
            year,
            rating,
            runtime_minutes,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn series(
    number: u32,
    title: &str,
    artwork: &str,
    year: u16,
    genre: &str,
    rating: f32,
    seasons: u8,
    description: &str,
) -> ContentItem {
    ContentItem {
        id: ContentId::series(number),
        title: title.into(),
        artwork: artwork.into(),
        genre: genre.into(),
        description: description.into(),
        media_url: SAMPLE_VIDEO.into(),
        details: ContentDetails::Series {
            year,
            rating,
            seasons,
        },
    }
}

fn channel(
    number: u16,
    name: &str,
    logo: &str,
    category: &str,
    epg: (&str, &str, &str),
) -> ContentItem {
    let (current, next, time_slot) = epg;
    ContentItem {
        id: ContentId::live(number as u32),
        title: name.into(),
        artwork: logo.into(),
        genre: category.into(),
        description: current.into(),
        media_url: SAMPLE_VIDEO.into(),
        details: ContentDetails::Live {
            channel_number: number,
            epg: Epg {
                current: current.into(),
                next: next.into(),
                time_slot: time_slot.into(),
            },
        },
    }
}

fn builtin_featured() -> FeaturedContent {
    let item = series(
        100,
        "Breaking Bad",
        "https://images.unsplash.com/photo-1489599162871-75d4d7e94a11?w=400&h=600&fit=crop",
        2008,
        "Crime Drama",
        9.5,
        5,
        "A high school chemistry teacher diagnosed with inoperable lung cancer turns to \
         manufacturing and selling methamphetamine to secure his family's future.",
    );

    FeaturedContent {
        item,
        backdrop: "https://images.unsplash.com/photo-1489599162871-75d4d7e94a11?w=1920&h=1080&fit=crop"
            .into(),
        age_rating: "TV-MA".into(),
        episode_length: "49 min".into(),
    }
}

fn builtin_movies() -> Vec<ContentItem> {
    vec![
        movie(
            1,
            "The Dark Knight",
            "https://images.unsplash.com/photo-1478720568477-b0ac077fe8e8?w=400&h=600&fit=crop",
            2008,
            "Action",
            9.0,
            152,
            "Batman raises the stakes in his war on crime with the joker wreaking havoc.",
        ),
        movie(
            2,
            "Inception",
            "https://images.unsplash.com/photo-1489599162871-75d4d7e94a11?w=400&h=600&fit=crop",
            2010,
            "Sci-Fi",
            8.8,
            148,
            "A thief who steals corporate secrets through dream-sharing technology.",
        ),
        movie(
            3,
            "Interstellar",
            "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?w=400&h=600&fit=crop",
            2014,
            "Sci-Fi",
            8.6,
            169,
            "A team of explorers travel through a wormhole in space.",
        ),
        movie(
            4,
            "The Matrix",
            "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=400&h=600&fit=crop",
            1999,
            "Action",
            8.7,
            136,
            "A computer hacker learns about the true nature of reality.",
        ),
        movie(
            5,
            "Pulp Fiction",
            "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=400&h=600&fit=crop",
            1994,
            "Crime",
            8.9,
            154,
            "The lives of two mob hitmen, a boxer, and others intertwine.",
        ),
    ]
}

fn builtin_series() -> Vec<ContentItem> {
    vec![
        series(
            1,
            "Stranger Things",
            "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&h=600&fit=crop",
            2016,
            "Horror",
            8.7,
            4,
            "When a young boy vanishes, a small town uncovers a mystery involving secret experiments.",
        ),
        series(
            2,
            "The Crown",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=400&h=600&fit=crop",
            2016,
            "Drama",
            8.6,
            6,
            "Follows the political rivalries and romance of Queen Elizabeth II's reign.",
        ),
        series(
            3,
            "Money Heist",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=600&fit=crop",
            2017,
            "Crime",
            8.3,
            5,
            "An unusual group of robbers attempt to carry out the most perfect robbery.",
        ),
    ]
}

fn builtin_live() -> Vec<ContentItem> {
    vec![
        channel(
            1,
            "CNN International",
            "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=200&h=200&fit=crop",
            "News",
            ("World News Today", "Business Report", "14:00 - 15:00"),
        ),
        channel(
            2,
            "ESPN Sports",
            "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=200&h=200&fit=crop",
            "Sports",
            ("Football Highlights", "Live Match", "15:00 - 17:00"),
        ),
        channel(
            3,
            "Discovery Channel",
            "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?w=200&h=200&fit=crop",
            "Documentary",
            ("Wild Life Safari", "Ocean Mysteries", "16:00 - 17:00"),
        ),
        channel(
            4,
            "MTV Music",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=200&h=200&fit=crop",
            "Music",
            ("Top 40 Countdown", "Music Videos", "17:00 - 18:00"),
        ),
        channel(
            5,
            "Comedy Central",
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=200&h=200&fit=crop",
            "Entertainment",
            ("Stand-up Comedy", "Comedy Show", "18:00 - 19:00"),
        ),
    ]
}
