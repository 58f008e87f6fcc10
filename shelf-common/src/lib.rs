//! shelf-common - pure domain logic for the Shelf frontend
//!
//! No UI framework, no I/O. Holds the Book record, genre cleanup, and the
//! catalog filter core shared by the Home and Browse views.

pub mod book;
pub mod catalog_filter;
pub mod genre;

pub use book::Book;
pub use catalog_filter::{derive_displayed, CatalogFilter, FilterConfig, FilterState, SearchFields};
pub use genre::{clean_genre, genre_rows, top_genres};
