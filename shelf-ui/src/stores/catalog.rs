//! Browse view state store

use dioxus::prelude::*;
use shelf_common::CatalogFilter;

/// State for the Browse view: the filter core plus fetch status.
///
/// All filter mutations go through `CatalogFilter`, which recomputes the
/// displayed subset synchronously; the view only ever reads the result.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Catalog snapshot + filter state + derived displayed list.
    pub filter: CatalogFilter,
    /// Whether the snapshot is still loading.
    pub loading: bool,
    /// Error message if the snapshot fetch failed.
    pub error: Option<String>,
}
