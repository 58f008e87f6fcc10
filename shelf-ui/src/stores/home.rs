//! Home view state store

use crate::display_types::UserStats;
use dioxus::prelude::*;
use shelf_common::{Book, CatalogFilter};

/// State for the Home view's shelf rows, headline stats and catalog section.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct HomeState {
    /// Title-only filter over the full catalog for the All Books section.
    pub catalog_filter: CatalogFilter,
    /// Personalized recommendations from the backend.
    pub recommended: Vec<Book>,
    /// Community trending subset.
    pub weekly_top: Vec<Book>,
    /// Books the user marked as currently reading.
    pub currently_reading: Vec<Book>,
    /// Wishlist books.
    pub wishlist: Vec<Book>,
    /// Top-genre shelves derived from the catalog snapshot.
    pub genre_rows: Vec<(String, Vec<Book>)>,
    /// Genre choices offered by the onboarding modal.
    pub available_genres: Vec<String>,
    /// Whether the one-time genre onboarding should be shown.
    pub show_onboarding: bool,
    /// Headline reading stats.
    pub stats: UserStats,
    /// Whether recommendations are still loading.
    pub loading: bool,
    /// Error message if the recommendation fetch failed.
    pub error: Option<String>,
}
