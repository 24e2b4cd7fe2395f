//! Data structures and types for NetStream
//!
//! Contains the shared models used across the application organized by domain:
//! - **Content**: browsable media records (movies, series, live channels)
//! - **Categories**: the tab filters shown in the header
//! - **Screen modes**: how video is fitted into the viewport

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Content Models
// =============================================================================

/// Kind discriminator for content items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
    Live,
}

impl ContentKind {
    /// Prefix used in namespaced content ids
    pub fn prefix(&self) -> &'static str {
        match self {
            ContentKind::Movie => "movie",
            ContentKind::Series => "series",
            ContentKind::Live => "live",
        }
    }

    /// Canonical catalog ordering: movies, then series, then live
    pub fn rank(&self) -> u8 {
        match self {
            ContentKind::Movie => 0,
            ContentKind::Series => 1,
            ContentKind::Live => 2,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "MOVIE"),
            ContentKind::Series => write!(f, "SERIES"),
            ContentKind::Live => write!(f, "LIVE"),
        }
    }
}

/// Stable identifier of a content item, namespaced by kind.
///
/// Source records of different kinds reuse the same numeric ids, so the
/// kind is part of the identity (`movie-2` and `series-2` are distinct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentId {
    pub kind: ContentKind,
    pub number: u32,
}

impl ContentId {
    pub const fn new(kind: ContentKind, number: u32) -> Self {
        Self { kind, number }
    }

    pub const fn movie(number: u32) -> Self {
        Self::new(ContentKind::Movie, number)
    }

    pub const fn series(number: u32) -> Self {
        Self::new(ContentKind::Series, number)
    }

    pub const fn live(number: u32) -> Self {
        Self::new(ContentKind::Live, number)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.prefix(), self.number)
    }
}

impl FromStr for ContentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, number) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| format!("invalid content id '{}': expected <kind>-<number>", s))?;

        let kind = match prefix.to_lowercase().as_str() {
            "movie" => ContentKind::Movie,
            "series" | "tv" => ContentKind::Series,
            "live" => ContentKind::Live,
            other => return Err(format!("unknown content kind '{}'", other)),
        };

        let number = number
            .parse()
            .map_err(|_| format!("invalid content number '{}'", number))?;

        Ok(Self { kind, number })
    }
}

impl TryFrom<String> for ContentId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> String {
        id.to_string()
    }
}

/// Electronic program guide entry for a live channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epg {
    pub current: String,
    pub next: String,
    pub time_slot: String,
}

/// Kind-specific attributes of a content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentDetails {
    Movie {
        year: u16,
        rating: f32,
        runtime_minutes: u32,
    },
    Series {
        year: u16,
        rating: f32,
        seasons: u8,
    },
    Live {
        channel_number: u16,
        epg: Epg,
    },
}

/// A unit of browsable media. Immutable once built from catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    pub artwork: String,
    pub genre: String,
    pub description: String,
    pub media_url: String,
    #[serde(flatten)]
    pub details: ContentDetails,
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        self.id.kind
    }

    pub fn is_live(&self) -> bool {
        self.kind() == ContentKind::Live
    }

    pub fn year(&self) -> Option<u16> {
        match self.details {
            ContentDetails::Movie { year, .. } | ContentDetails::Series { year, .. } => Some(year),
            ContentDetails::Live { .. } => None,
        }
    }

    pub fn rating(&self) -> Option<f32> {
        match self.details {
            ContentDetails::Movie { rating, .. } | ContentDetails::Series { rating, .. } => {
                Some(rating)
            }
            ContentDetails::Live { .. } => None,
        }
    }

    pub fn epg(&self) -> Option<&Epg> {
        match &self.details {
            ContentDetails::Live { epg, .. } => Some(epg),
            _ => None,
        }
    }

    pub fn channel_number(&self) -> Option<u16> {
        match self.details {
            ContentDetails::Live { channel_number, .. } => Some(channel_number),
            _ => None,
        }
    }

    /// Known runtime in seconds (movies only)
    pub fn runtime_secs(&self) -> Option<f64> {
        match self.details {
            ContentDetails::Movie { runtime_minutes, .. } => Some(runtime_minutes as f64 * 60.0),
            _ => None,
        }
    }

    /// Duration label shown on row cards ("152 min", "4 Seasons", "LIVE")
    pub fn duration_label(&self) -> String {
        match self.details {
            ContentDetails::Movie { runtime_minutes, .. } => format!("{} min", runtime_minutes),
            ContentDetails::Series { seasons, .. } => {
                format!("{} Season{}", seasons, if seasons > 1 { "s" } else { "" })
            }
            ContentDetails::Live { .. } => "LIVE".to_string(),
        }
    }

    /// Secondary line for the player overlay: "genre • year" or "genre • Live"
    pub fn meta_line(&self) -> String {
        match self.year() {
            Some(year) => format!("{} • {}", self.genre, year),
            None => format!("{} • Live", self.genre),
        }
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.title, self.kind(), self.duration_label())
    }
}

/// Record shown in the hero banner on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedContent {
    pub item: ContentItem,
    pub backdrop: String,
    pub age_rating: String,
    pub episode_length: String,
}

impl FeaturedContent {
    /// Badge text above the hero title
    pub fn badge(&self) -> &'static str {
        match self.item.kind() {
            ContentKind::Series => "SERIES",
            _ => "MOVIE",
        }
    }

    /// "2008 • TV-MA • Crime Drama • 49 min"
    pub fn metadata_line(&self) -> String {
        let year = self
            .item
            .year()
            .map(|y| y.to_string())
            .unwrap_or_default();
        format!(
            "{} • {} • {} • {}",
            year, self.age_rating, self.item.genre, self.episode_length
        )
    }
}

// =============================================================================
// Category Models
// =============================================================================

/// Which subset of content is visible.
///
/// `News` and `Sports` are derived: live items whose genre label contains
/// "news" / "sports" case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Movies,
    #[serde(rename = "tvshows", alias = "series")]
    Series,
    Live,
    News,
    Sports,
}

impl CategoryFilter {
    /// Tab order in the header
    pub const ALL: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Movies,
        CategoryFilter::Series,
        CategoryFilter::Live,
        CategoryFilter::News,
        CategoryFilter::Sports,
    ];

    /// Stable key used on the command line and in config
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Movies => "movies",
            CategoryFilter::Series => "tvshows",
            CategoryFilter::Live => "live",
            CategoryFilter::News => "news",
            CategoryFilter::Sports => "sports",
        }
    }

    /// Tab label in the header
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Home",
            CategoryFilter::Movies => "Movies",
            CategoryFilter::Series => "TV Shows",
            CategoryFilter::Live => "Live TV",
            CategoryFilter::News => "News",
            CategoryFilter::Sports => "Sports",
        }
    }

    /// Title of the single row shown for a non-home category
    pub fn row_title(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Content",
            CategoryFilter::Movies => "Movies",
            CategoryFilter::Series => "TV Shows",
            CategoryFilter::Live => "Live TV",
            CategoryFilter::News => "News",
            CategoryFilter::Sports => "Sports",
        }
    }

    /// Whether an item is visible under this filter
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Movies => item.kind() == ContentKind::Movie,
            CategoryFilter::Series => item.kind() == ContentKind::Series,
            CategoryFilter::Live => item.is_live(),
            CategoryFilter::News => item.is_live() && genre_contains(&item.genre, "news"),
            CategoryFilter::Sports => item.is_live() && genre_contains(&item.genre, "sports"),
        }
    }
}

fn genre_contains(genre: &str, needle: &str) -> bool {
    genre.to_lowercase().contains(needle)
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "home" => Ok(CategoryFilter::All),
            "movies" => Ok(CategoryFilter::Movies),
            "tvshows" | "series" => Ok(CategoryFilter::Series),
            "live" => Ok(CategoryFilter::Live),
            "news" => Ok(CategoryFilter::News),
            "sports" => Ok(CategoryFilter::Sports),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

// =============================================================================
// Screen Mode Models
// =============================================================================

/// How the playback provider fits video into the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Contain,
    Cover,
    Stretch,
    Center,
}

/// Screen (aspect) mode, cycled in the fixed order fit → fill → stretch → original
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenMode {
    #[default]
    Fit,
    Fill,
    Stretch,
    Original,
}

impl ScreenMode {
    pub const ALL: [ScreenMode; 4] = [
        ScreenMode::Fit,
        ScreenMode::Fill,
        ScreenMode::Stretch,
        ScreenMode::Original,
    ];

    /// Next mode in the cycle, wrapping after `Original`
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            ScreenMode::Fit => 0,
            ScreenMode::Fill => 1,
            ScreenMode::Stretch => 2,
            ScreenMode::Original => 3,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ScreenMode::Fit => "fit",
            ScreenMode::Fill => "fill",
            ScreenMode::Stretch => "stretch",
            ScreenMode::Original => "original",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenMode::Fit => "Fit Screen",
            ScreenMode::Fill => "Fill Screen",
            ScreenMode::Stretch => "Stretch",
            ScreenMode::Original => "Original",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScreenMode::Fit => "Scale to fit without cropping",
            ScreenMode::Fill => "Scale to fill, may crop edges",
            ScreenMode::Stretch => "Stretch to exact screen size",
            ScreenMode::Original => "Keep original aspect ratio",
        }
    }

    pub fn resize_mode(&self) -> ResizeMode {
        match self {
            ScreenMode::Fit => ResizeMode::Contain,
            ScreenMode::Fill => ResizeMode::Cover,
            ScreenMode::Stretch => ResizeMode::Stretch,
            ScreenMode::Original => ResizeMode::Center,
        }
    }
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScreenMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fit" => Ok(ScreenMode::Fit),
            "fill" => Ok(ScreenMode::Fill),
            "stretch" => Ok(ScreenMode::Stretch),
            "original" => Ok(ScreenMode::Original),
            other => Err(format!("unknown screen mode '{}'", other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
