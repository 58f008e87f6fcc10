//! Home view component - pure rendering, no data fetching
//!
//! Accepts `ReadStore<HomeState>` and uses lenses for granular reactivity.

use crate::components::book_card::BookCard;
use crate::components::book_shelf_row::BookShelfRow;
use crate::components::genre_onboarding::GenreOnboardingView;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::components::icons::{BookOpenIcon, BookmarkIcon, SearchIcon, SparklesIcon, StarIcon};
use crate::components::{Select, SelectOption};
use crate::display_types::UserStats;
use crate::stores::home::{HomeState, HomeStateStoreExt};
use dioxus::prelude::*;
use shelf_common::CatalogFilter;

/// Home view: headline stats, recommendation shelves and genre rows.
#[component]
pub fn HomeView(
    state: ReadStore<HomeState>,
    /// Greeting name for the header
    user_name: String,
    on_book_click: EventHandler<i64>,
    on_catalog_search: EventHandler<String>,
    on_catalog_genre: EventHandler<String>,
    on_catalog_rating: EventHandler<f64>,
    /// Called with the chosen genres when onboarding completes
    on_onboarding_save: EventHandler<Vec<String>>,
    on_onboarding_skip: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let show_onboarding = *state.show_onboarding().read();
    let stats = *state.stats().read();
    let recommended = state.recommended().read().clone();
    let weekly_top = state.weekly_top().read().clone();
    let currently_reading = state.currently_reading().read().clone();
    let wishlist = state.wishlist().read().clone();
    let genre_rows = state.genre_rows().read().clone();
    let available_genres = state.available_genres().read().clone();
    let catalog_filter = state.catalog_filter().read().clone();

    rsx! {
        PageContainer {
            h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Welcome back, {user_name}" }
            p { class: "text-gray-500 mb-6", "Here's what's on your shelf today." }

            StatsRow { stats }

            if loading {
                LoadingSpinner { message: "Loading recommendations...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else {
                BookShelfRow {
                    title: "Recommended for You".to_string(),
                    books: recommended,
                    on_book_click,
                    icon: rsx! {
                        SparklesIcon { class: "w-5 h-5 text-indigo-500" }
                    },
                    reason: "Based on your reading preferences and similar users".to_string(),
                }
                BookShelfRow {
                    title: "Trending This Week".to_string(),
                    books: weekly_top,
                    on_book_click,
                    icon: rsx! {
                        StarIcon { class: "w-5 h-5 text-yellow-400" }
                    },
                    reason: "Most read books by our community".to_string(),
                }
                BookShelfRow {
                    title: "Currently Reading".to_string(),
                    books: currently_reading,
                    on_book_click,
                    icon: rsx! {
                        BookOpenIcon { class: "w-5 h-5 text-green-600" }
                    },
                    reason: "Pick up where you left off".to_string(),
                }
                BookShelfRow {
                    title: "Your Wishlist".to_string(),
                    books: wishlist,
                    on_book_click,
                    icon: rsx! {
                        BookmarkIcon { class: "w-5 h-5 text-pink-500" }
                    },
                    reason: "Books you want to read".to_string(),
                }
                for (genre , books) in genre_rows {
                    BookShelfRow {
                        key: "{genre}",
                        title: genre.clone(),
                        books,
                        on_book_click,
                        reason: format!("Explore the best in {genre}"),
                    }
                }

                CatalogSection {
                    filter: catalog_filter,
                    genres: available_genres.clone(),
                    on_catalog_search,
                    on_catalog_genre,
                    on_catalog_rating,
                    on_book_click,
                }
            }
        }

        if show_onboarding {
            GenreOnboardingView {
                genres: available_genres,
                on_save: on_onboarding_save,
                on_skip: on_onboarding_skip,
            }
        }
    }
}

/// Searchable catalog grid below the shelves. Title-only search; the
/// unfiltered view is capped at the first page window.
#[component]
fn CatalogSection(
    filter: CatalogFilter,
    genres: Vec<String>,
    on_catalog_search: EventHandler<String>,
    on_catalog_genre: EventHandler<String>,
    on_catalog_rating: EventHandler<f64>,
    on_book_click: EventHandler<i64>,
) -> Element {
    let filter_state = filter.state().clone();
    let displayed = filter.displayed().to_vec();
    let total = filter.total();
    let shown = displayed.len();
    let is_filtered = filter.is_filtered();
    let min_rating = filter_state.min_rating;

    rsx! {
        section { class: "mb-8",
            h2 { class: "text-lg font-bold text-gray-900 mb-3", "All Books" }

            div { class: "grid grid-cols-1 sm:grid-cols-3 gap-3 mb-4",
                div { class: "relative",
                    div { class: "pointer-events-none absolute inset-y-0 left-3 flex items-center",
                        SearchIcon { class: "w-4 h-4 text-gray-400" }
                    }
                    input {
                        class: "w-full pl-9 pr-3 py-2 border border-gray-300 rounded-lg text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        r#type: "text",
                        placeholder: "Search by title...",
                        value: "{filter_state.search_term}",
                        oninput: move |e| on_catalog_search.call(e.value()),
                    }
                }
                Select {
                    value: filter_state.genre.clone(),
                    onchange: move |val: String| on_catalog_genre.call(val),
                    SelectOption { value: "", label: "All Genres" }
                    for genre in genres {
                        SelectOption { value: genre.clone(), label: genre.clone() }
                    }
                }
                div {
                    label { class: "block text-xs text-gray-500 mb-1",
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
                                on_catalog_rating.call(val);
                            }
                        },
                    }
                }
            }

            p { class: "text-sm text-gray-500 mb-4",
                if is_filtered {
                    {format!("{shown} {} found", plural_books(shown))}
                } else {
                    {format!("Showing {shown} of {total} {}", plural_books(total))}
                }
            }

            if displayed.is_empty() {
                p { class: "text-center text-gray-500 py-8",
                    "No books match your search or filters."
                }
            } else {
                div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
                    for book in displayed {
                        BookCard { key: "{book.id}", book, on_click: on_book_click }
                    }
                }
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

/// Quick stats cards across the top of the home view.
#[component]
fn StatsRow(stats: UserStats) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-4 gap-4 mb-8",
            StatCard {
                label: "Read this month".to_string(),
                value: stats.books_this_month,
            }
            StatCard {
                label: "Total books read".to_string(),
                value: stats.total_books_read,
            }
            StatCard {
                label: "Currently reading".to_string(),
                value: stats.currently_reading,
            }
            StatCard { label: "On wishlist".to_string(), value: stats.wishlist_count }
        }
    }
}

#[component]
fn StatCard(label: String, value: i64) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg border border-gray-200 p-4",
            p { class: "text-2xl font-bold text-gray-900", "{value}" }
            p { class: "text-sm text-gray-500", "{label}" }
        }
    }
}
