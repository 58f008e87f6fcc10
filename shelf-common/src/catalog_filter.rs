//! Catalog filter core shared by the Home and Browse views.
//!
//! Pure derivation of the displayed book list from the catalog snapshot and
//! the current filter state. No I/O, no DOM: scroll preservation is a view
//! concern layered on top by the pages that call into this.

use crate::book::Book;
use crate::genre::clean_genre;

/// Which book fields the free-text search matches against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchFields {
    /// Title only.
    #[default]
    TitleOnly,
    /// Title or author.
    TitleAndAuthor,
}

/// Per-view filter configuration.
///
/// Consolidates the divergent Home/Browse truncation rules: both views share
/// one derivation, parameterized instead of re-implemented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterConfig {
    /// Items revealed per page when no filter is active.
    pub page_size: usize,
    /// When false the unfiltered view stays capped at `page_size` and
    /// "load more" is never offered.
    pub pagination_enabled: bool,
    pub search_fields: SearchFields,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            pagination_enabled: true,
            search_fields: SearchFields::TitleOnly,
        }
    }
}

/// Ephemeral filter state. Reset whenever the catalog snapshot is reloaded.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring match; whitespace-only means inactive.
    pub search_term: String,
    /// Exact match against the cleaned genre; empty means inactive.
    pub genre: String,
    /// Books qualify when `rating >= min_rating`; values <= 1 disable the
    /// predicate. Unrated books (rating 0) drop out as soon as it is active.
    pub min_rating: f64,
    /// Page window used only while no filter is active.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            genre: String::new(),
            min_rating: 1.0,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn search_active(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn genre_active(&self) -> bool {
        !self.genre.is_empty()
    }

    pub fn rating_active(&self) -> bool {
        self.min_rating > 1.0
    }

    /// Whether any predicate is active (the displayed subset is then the full
    /// conjunctive match, with pagination bypassed).
    pub fn is_filtered(&self) -> bool {
        self.search_active() || self.genre_active() || self.rating_active()
    }
}

fn matches(book: &Book, state: &FilterState, config: &FilterConfig) -> bool {
    if state.search_active() {
        let term = state.search_term.trim().to_lowercase();
        let title_hit = book.title.to_lowercase().contains(&term);
        let author_hit = config.search_fields == SearchFields::TitleAndAuthor
            && book.author.to_lowercase().contains(&term);
        if !title_hit && !author_hit {
            return false;
        }
    }

    if state.genre_active() && clean_genre(&book.genre) != state.genre {
        return false;
    }

    if state.rating_active() && book.rating < state.min_rating {
        return false;
    }

    true
}

/// Derive the displayed subset: the conjunction of all active predicates over
/// the snapshot, truncated to the page window only when nothing is active.
pub fn derive_displayed(catalog: &[Book], state: &FilterState, config: &FilterConfig) -> Vec<Book> {
    let filtered = catalog.iter().filter(|b| matches(b, state, config));

    if state.is_filtered() {
        filtered.cloned().collect()
    } else {
        let window = if config.pagination_enabled {
            state.page.max(1) * config.page_size
        } else {
            config.page_size
        };
        filtered.take(window).cloned().collect()
    }
}

/// Owns the catalog snapshot and filter state for one view instance.
///
/// Every operation recomputes the displayed subset synchronously, mirroring
/// the derivation's idempotence: applying the same state twice yields the
/// same list.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogFilter {
    catalog: Vec<Book>,
    state: FilterState,
    config: FilterConfig,
    displayed: Vec<Book>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl CatalogFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            catalog: Vec::new(),
            state: FilterState::default(),
            config,
            displayed: Vec::new(),
        }
    }

    pub fn with_catalog(catalog: Vec<Book>, config: FilterConfig) -> Self {
        let mut filter = Self::new(config);
        filter.replace_catalog(catalog);
        filter
    }

    /// Install a fresh snapshot. Filter state resets along with it.
    pub fn replace_catalog(&mut self, catalog: Vec<Book>) {
        self.catalog = catalog;
        self.state = FilterState::default();
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.recompute();
    }

    pub fn set_genre_filter(&mut self, genre: impl Into<String>) {
        self.state.genre = genre.into();
        self.recompute();
    }

    pub fn set_rating_filter(&mut self, min_rating: f64) {
        self.state.min_rating = min_rating;
        self.recompute();
    }

    /// Reveal the next page window. No-op while filtered, when pagination is
    /// disabled, or once every item is already displayed.
    pub fn load_more(&mut self) {
        if !self.has_more() {
            return;
        }
        self.state.page += 1;
        self.recompute();
    }

    /// Clear all predicates and return to the first unfiltered page.
    pub fn reset_filters(&mut self) {
        self.state = FilterState::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.displayed = derive_displayed(&self.catalog, &self.state, &self.config);
    }

    pub fn displayed(&self) -> &[Book] {
        &self.displayed
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_filtered(&self) -> bool {
        self.state.is_filtered()
    }

    /// Whether "load more" should be offered: only on the unfiltered view,
    /// with pagination enabled, while items remain beyond the window.
    pub fn has_more(&self) -> bool {
        self.config.pagination_enabled
            && !self.state.is_filtered()
            && self.displayed.len() < self.catalog.len()
    }

    /// Total snapshot size (the "N total" header line).
    pub fn total(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, genre: &str, rating: f64) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            rating,
            ..Default::default()
        }
    }

    fn catalog_of(n: i64) -> Vec<Book> {
        (1..=n)
            .map(|id| book(id, &format!("Title {id}"), "Author", "Fiction", 3.0))
            .collect()
    }

    fn ids(books: &[Book]) -> Vec<i64> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_unfiltered_shows_first_page_window() {
        let filter = CatalogFilter::with_catalog(catalog_of(25), FilterConfig::default());
        assert_eq!(filter.displayed().len(), 20);
        assert_eq!(ids(filter.displayed()), (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_displayed_is_subset_of_catalog() {
        let catalog = catalog_of(25);
        let mut filter = CatalogFilter::with_catalog(catalog.clone(), FilterConfig::default());
        filter.set_search_term("Title 1");
        for shown in filter.displayed() {
            assert!(catalog.contains(shown));
        }
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "The Hobbit", "Tolkien", "Fantasy", 4.5),
                book(2, "Dune", "Herbert", "Sci-Fi", 4.2),
            ],
            FilterConfig::default(),
        );
        filter.set_search_term("hobbit");
        assert_eq!(ids(filter.displayed()), [1]);
    }

    #[test]
    fn test_search_ignores_author_with_title_only() {
        let mut filter = CatalogFilter::with_catalog(
            vec![book(1, "The Hobbit", "Tolkien", "Fantasy", 4.5)],
            FilterConfig::default(),
        );
        filter.set_search_term("tolkien");
        assert!(filter.displayed().is_empty());
    }

    #[test]
    fn test_search_matches_author_when_configured() {
        let config = FilterConfig {
            search_fields: SearchFields::TitleAndAuthor,
            ..Default::default()
        };
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "The Hobbit", "Tolkien", "Fantasy", 4.5),
                book(2, "Dune", "Herbert", "Sci-Fi", 4.2),
            ],
            config,
        );
        filter.set_search_term("TOLKIEN");
        assert_eq!(ids(filter.displayed()), [1]);
    }

    #[test]
    fn test_unmatched_search_yields_empty_not_error() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(5), FilterConfig::default());
        filter.set_search_term("no such book");
        assert!(filter.displayed().is_empty());
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(25), FilterConfig::default());
        filter.set_search_term("   ");
        assert_eq!(filter.displayed().len(), 20);
        assert!(!filter.is_filtered());
    }

    #[test]
    fn test_genre_filter_bypasses_pagination() {
        // 25 books, 3 of them Fantasy, pageSize 20: the genre filter yields
        // exactly those 3 regardless of the page window.
        let mut catalog = catalog_of(22);
        for id in 23..=25 {
            catalog.push(book(id, &format!("Title {id}"), "Author", "Fantasy", 4.0));
        }
        let mut filter = CatalogFilter::with_catalog(catalog, FilterConfig::default());
        filter.set_genre_filter("Fantasy");
        assert_eq!(ids(filter.displayed()), [23, 24, 25]);

        // Clearing the genre returns to the first page window.
        filter.set_genre_filter("");
        assert_eq!(filter.displayed().len(), 20);
    }

    #[test]
    fn test_genre_matches_cleaned_form() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "A", "X", "['Fantasy', 'Epic']", 4.0),
                book(2, "B", "Y", "Mystery", 4.0),
            ],
            FilterConfig::default(),
        );
        filter.set_genre_filter("Fantasy");
        assert_eq!(ids(filter.displayed()), [1]);
    }

    #[test]
    fn test_rating_threshold_is_inclusive() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "A", "X", "Fiction", 3.4),
                book(2, "B", "Y", "Fiction", 3.5),
            ],
            FilterConfig::default(),
        );
        filter.set_rating_filter(3.5);
        assert_eq!(ids(filter.displayed()), [2]);

        filter.set_rating_filter(3.4);
        assert_eq!(ids(filter.displayed()), [1, 2]);
    }

    #[test]
    fn test_rating_at_or_below_one_is_inactive() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "A", "X", "Fiction", 0.0),
                book(2, "B", "Y", "Fiction", 5.0),
            ],
            FilterConfig::default(),
        );
        filter.set_rating_filter(1.0);
        assert_eq!(filter.displayed().len(), 2);
        assert!(!filter.is_filtered());
    }

    #[test]
    fn test_unrated_books_drop_out_above_one() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "A", "X", "Fiction", 0.0),
                book(2, "B", "Y", "Fiction", 2.0),
            ],
            FilterConfig::default(),
        );
        filter.set_rating_filter(1.1);
        assert_eq!(ids(filter.displayed()), [2]);
    }

    #[test]
    fn test_predicates_conjoin() {
        let mut filter = CatalogFilter::with_catalog(
            vec![
                book(1, "The Hobbit", "Tolkien", "Fantasy", 4.5),
                book(2, "Hobbit Fanbook", "Anon", "Fantasy", 2.0),
                book(3, "The Hobbit Guide", "Anon", "Reference", 4.8),
            ],
            FilterConfig::default(),
        );
        filter.set_search_term("hobbit");
        filter.set_genre_filter("Fantasy");
        filter.set_rating_filter(4.0);
        assert_eq!(ids(filter.displayed()), [1]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let catalog = catalog_of(25);
        let state = FilterState {
            search_term: "Title 1".into(),
            min_rating: 2.5,
            ..Default::default()
        };
        let config = FilterConfig::default();
        let first = derive_displayed(&catalog, &state, &config);
        let second = derive_displayed(&catalog, &state, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_more_extends_window() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), FilterConfig::default());
        assert!(filter.has_more());
        filter.load_more();
        assert_eq!(filter.displayed().len(), 40);
        filter.load_more();
        assert_eq!(filter.displayed().len(), 45);
        assert!(!filter.has_more());
    }

    #[test]
    fn test_load_more_is_noop_at_end() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(10), FilterConfig::default());
        assert_eq!(filter.displayed().len(), 10);
        assert!(!filter.has_more());
        filter.load_more();
        assert_eq!(filter.displayed().len(), 10);
        assert_eq!(filter.state().page, 1);
    }

    #[test]
    fn test_load_more_is_noop_while_filtered() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), FilterConfig::default());
        filter.set_search_term("Title");
        assert!(!filter.has_more());
        filter.load_more();
        assert_eq!(filter.state().page, 1);
    }

    #[test]
    fn test_pagination_disabled_caps_at_page_size() {
        let config = FilterConfig {
            pagination_enabled: false,
            ..Default::default()
        };
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), config);
        assert_eq!(filter.displayed().len(), 20);
        assert!(!filter.has_more());
        filter.load_more();
        assert_eq!(filter.displayed().len(), 20);
    }

    #[test]
    fn test_unpaginated_title_only_config_end_to_end() {
        // The fixed-slice variant: title-only search, no load-more. Filtering
        // reveals every match past the cap; clearing restores the cap.
        let config = FilterConfig {
            pagination_enabled: false,
            search_fields: SearchFields::TitleOnly,
            ..Default::default()
        };
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), config);
        assert_eq!(filter.displayed().len(), 20);

        filter.set_search_term("Title");
        assert_eq!(filter.displayed().len(), 45);

        filter.set_search_term("Author");
        assert!(filter.displayed().is_empty());

        filter.set_search_term("");
        assert_eq!(filter.displayed().len(), 20);
        assert!(!filter.has_more());
    }

    #[test]
    fn test_filtered_results_shown_in_full() {
        // More matches than a page window: filtering bypasses truncation.
        let catalog: Vec<Book> = (1..=30)
            .map(|id| book(id, &format!("Saga {id}"), "Author", "Fantasy", 3.0))
            .collect();
        let mut filter = CatalogFilter::with_catalog(catalog, FilterConfig::default());
        filter.set_genre_filter("Fantasy");
        assert_eq!(filter.displayed().len(), 30);
    }

    #[test]
    fn test_reset_filters_returns_to_first_page() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), FilterConfig::default());
        filter.load_more();
        filter.set_search_term("Title 1");
        filter.set_genre_filter("Fiction");
        filter.set_rating_filter(4.0);
        filter.reset_filters();
        assert_eq!(*filter.state(), FilterState::default());
        assert_eq!(filter.displayed().len(), 20);
    }

    #[test]
    fn test_replace_catalog_resets_state() {
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), FilterConfig::default());
        filter.set_search_term("Title 7");
        filter.replace_catalog(catalog_of(5));
        assert_eq!(*filter.state(), FilterState::default());
        assert_eq!(filter.displayed().len(), 5);
        assert_eq!(filter.total(), 5);
    }

    #[test]
    fn test_page_counter_survives_filter_round_trip() {
        // The page window only matters while unfiltered; toggling a filter on
        // and off returns to the previously revealed window.
        let mut filter = CatalogFilter::with_catalog(catalog_of(45), FilterConfig::default());
        filter.load_more();
        filter.set_search_term("Title 9");
        filter.set_search_term("");
        assert_eq!(filter.displayed().len(), 40);
    }
}
