//! Browse view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogState>` and uses lenses for granular reactivity.
//! All filter semantics live in `shelf_common::CatalogFilter`; this view only
//! renders the derived `displayed` list and forwards control changes upward.

use crate::components::book_card::BookCard;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::components::icons::{BookOpenIcon, SearchIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, Select, SelectOption};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use dioxus::prelude::*;

/// Browse view: search box, filter panel, book grid and load-more control.
#[component]
pub fn BrowseView(
    state: ReadStore<CatalogState>,
    /// Genre options for the filter dropdown, most frequent first
    genres: Vec<String>,
    on_search_change: EventHandler<String>,
    on_genre_change: EventHandler<String>,
    on_rating_change: EventHandler<f64>,
    on_reset: EventHandler<()>,
    on_load_more: EventHandler<()>,
    on_book_click: EventHandler<i64>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let filter = state.filter().read().clone();

    let mut show_filters = use_signal(|| false);

    let filter_state = filter.state().clone();
    let displayed = filter.displayed().to_vec();
    let total = filter.total();
    let shown = displayed.len();
    let is_filtered = filter.is_filtered();
    let has_more = filter.has_more();
    let min_rating = filter_state.min_rating;

    rsx! {
        PageContainer {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Browse Books" }
            }

            // Search + filter toggle row
            div { class: "flex gap-3 mb-4",
                div { class: "relative flex-1",
                    div { class: "pointer-events-none absolute inset-y-0 left-3 flex items-center",
                        SearchIcon { class: "w-4 h-4 text-gray-400" }
                    }
                    input {
                        class: "w-full pl-9 pr-3 py-2 border border-gray-300 rounded-lg text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        r#type: "text",
                        placeholder: "Search by title or author...",
                        value: "{filter_state.search_term}",
                        oninput: move |e| on_search_change.call(e.value()),
                    }
                }
                Button {
                    variant: if show_filters() { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    size: ButtonSize::Medium,
                    onclick: move |_| show_filters.set(!show_filters()),
                    "Filters"
                }
            }

            if show_filters() {
                FilterPanel {
                    genres: genres.clone(),
                    selected_genre: filter_state.genre.clone(),
                    min_rating,
                    on_genre_change,
                    on_rating_change,
                    on_reset,
                }
            }

            if loading {
                LoadingSpinner { message: "Loading books...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else {
                // Count line: "of {total}" only while results are truncated
                p { class: "text-sm text-gray-500 mb-4",
                    if is_filtered {
                        {format!("{shown} {} found", plural_books(shown))}
                    } else {
                        {format!("Showing {shown} of {total} {}", plural_books(total))}
                    }
                }

                if displayed.is_empty() {
                    EmptyResults { is_filtered, on_reset }
                } else {
                    div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
                        for book in displayed {
                            BookCard { key: "{book.id}", book, on_click: on_book_click }
                        }
                    }
                }

                if has_more {
                    div { class: "flex justify-center mt-8",
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_load_more.call(()),
                            "Load More"
                        }
                    }
                }
            }
        }
    }
}

/// Collapsible panel holding the genre and rating controls.
#[component]
fn FilterPanel(
    genres: Vec<String>,
    selected_genre: String,
    min_rating: f64,
    on_genre_change: EventHandler<String>,
    on_rating_change: EventHandler<f64>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg p-4 mb-4",
            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Genre" }
                    Select {
                        value: selected_genre,
                        onchange: move |val: String| on_genre_change.call(val),
                        SelectOption { value: "", label: "All Genres" }
                        for genre in genres {
                            SelectOption { value: genre.clone(), label: genre.clone() }
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1",
                        if min_rating > 1.0 {
                            {format!("Minimum Rating: {min_rating:.1}+")}
                        } else {
                            "Minimum Rating: Any"
                        }
                    }
                    input {
                        class: "w-full accent-indigo-600",
                        r#type: "range",
                        min: "1",
                        max: "5",
                        step: "0.1",
                        value: "{min_rating}",
                        oninput: move |e| {
                            if let Ok(val) = e.value().parse::<f64>() {
                                on_rating_change.call(val);
                            }
                        },
                    }
                }
            }
            div { class: "flex justify-end mt-3",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| on_reset.call(()),
                    XIcon { class: "w-3.5 h-3.5" }
                    "Clear Filters"
                }
            }
        }
    }
}

#[component]
fn EmptyResults(is_filtered: bool, on_reset: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-300 mb-4",
                BookOpenIcon { class: "w-16 h-16 mx-auto" }
            }
            h2 { class: "text-xl font-bold text-gray-700 mb-2", "No books found" }
            if is_filtered {
                p { class: "text-gray-500 mb-4", "Try adjusting your search or filters." }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_reset.call(()),
                    "Clear Filters"
                }
            } else {
                p { class: "text-gray-500", "The catalog is empty right now." }
            }
        }
    }
}

fn plural_books(count: usize) -> &'static str {
    if count == 1 {
        "book"
    } else {
        "books"
    }
}
