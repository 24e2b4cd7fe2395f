//! Browse screen: header tabs, hero banner and content rows

pub mod category;
pub mod hero;
pub mod row;
pub mod screen;

pub use category::CategorySelector;
pub use hero::{HeroBanner, HeroButton};
pub use row::{AutoScroll, ContentRow, RowGeometry, RowId, ScrollRequest, ScrollViewport};
pub use screen::{BrowseAction, BrowseScreen, FocusZone};
