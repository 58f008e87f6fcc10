use crate::toast::Toaster;
use crate::{api, dom};
use dioxus::prelude::*;
use shelf_common::{genre_rows, top_genres, Book, CatalogFilter, FilterConfig, SearchFields};
use shelf_ui::display_types::{BookActivity, ReadingStatus, UserSession};
use shelf_ui::stores::home::{HomeState, HomeStateStoreExt};
use shelf_ui::{BookModalView, HomeView, RatingSubmission};
use std::collections::HashMap;

const GENRE_ROW_COUNT: usize = 4;
const BOOKS_PER_ROW: usize = 10;
const ONBOARDING_GENRE_LIMIT: usize = 20;

// Home searches titles only and shows a fixed first-page slice when
// unfiltered; Browse carries the paginated variant.
fn home_config() -> FilterConfig {
    FilterConfig {
        page_size: 20,
        pagination_enabled: false,
        search_fields: SearchFields::TitleOnly,
    }
}

#[component]
pub fn Home() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };
    let user_id = user.user_id;
    let user_name = user.display_name().to_string();

    let mut toaster: Toaster = use_context();

    let state = use_store(|| HomeState {
        loading: true,
        ..Default::default()
    });
    // Union of every shelf, used to resolve modal clicks back to a Book.
    let mut lookup = use_signal(Vec::<Book>::new);
    let mut ratings = use_signal(HashMap::<i64, BookActivity>::new);
    let mut selected = use_signal(|| None::<Book>);

    let load_recommendations = use_callback(move |()| {
        spawn(async move {
            match api::fetch_recommendations(user_id).await {
                Ok(books) => {
                    lookup.write().extend(books.iter().cloned());
                    state.recommended().set(books);
                    state.error().set(None);
                }
                Err(e) => state.error().set(Some(e)),
            }
            state.loading().set(false);
        });
    });

    let reload_stats = use_callback(move |()| {
        spawn(async move {
            match api::fetch_user_stats(user_id).await {
                Ok(stats) => state.stats().set(stats),
                Err(e) => tracing::warn!("stats fetch failed: {e}"),
            }
        });
    });

    use_future(move || async move {
        load_recommendations.call(());
        reload_stats.call(());

        match api::fetch_books().await {
            Ok(catalog) => {
                state
                    .genre_rows()
                    .set(genre_rows(&catalog, GENRE_ROW_COUNT, BOOKS_PER_ROW));
                state
                    .available_genres()
                    .set(top_genres(&catalog, ONBOARDING_GENRE_LIMIT));
                state
                    .catalog_filter()
                    .set(CatalogFilter::with_catalog(catalog.clone(), home_config()));

                // Currently-reading shelf joins the catalog with activity rows
                match api::fetch_user_ratings(user_id).await {
                    Ok(map) => {
                        let reading: Vec<Book> = catalog
                            .iter()
                            .filter(|b| {
                                map.get(&b.id).is_some_and(|a| a.status == "reading")
                            })
                            .cloned()
                            .collect();
                        state.currently_reading().set(reading);
                        ratings.set(map);
                    }
                    Err(e) => tracing::warn!("ratings fetch failed: {e}"),
                }

                lookup.write().extend(catalog);
            }
            Err(e) => tracing::warn!("catalog fetch failed: {e}"),
        }

        match api::fetch_weekly_top().await {
            Ok(books) => {
                lookup.write().extend(books.iter().cloned());
                state.weekly_top().set(books);
            }
            Err(e) => tracing::warn!("weekly top fetch failed: {e}"),
        }

        match api::fetch_wishlist(user_id).await {
            Ok(books) => {
                lookup.write().extend(books.iter().cloned());
                state.wishlist().set(books);
            }
            Err(e) => tracing::warn!("wishlist fetch failed: {e}"),
        }

        // First visit: no saved preferences yet
        match api::fetch_preferences(user_id).await {
            Ok(prefs) => state.show_onboarding().set(prefs.is_empty()),
            Err(e) => tracing::warn!("preferences fetch failed: {e}"),
        }
    });

    rsx! {
        HomeView {
            state,
            user_name,
            on_book_click: move |book_id: i64| {
                let book = lookup.read().iter().find(|b| b.id == book_id).cloned();
                selected.set(book);
            },
            on_catalog_search: move |term: String| {
                let y = dom::scroll_y();
                let mut filter = state.catalog_filter().cloned();
                filter.set_search_term(term);
                state.catalog_filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_catalog_genre: move |genre: String| {
                let y = dom::scroll_y();
                let mut filter = state.catalog_filter().cloned();
                filter.set_genre_filter(genre);
                state.catalog_filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_catalog_rating: move |min_rating: f64| {
                let y = dom::scroll_y();
                let mut filter = state.catalog_filter().cloned();
                filter.set_rating_filter(min_rating);
                state.catalog_filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_onboarding_save: move |genres: Vec<String>| {
                state.show_onboarding().set(false);
                spawn(async move {
                    match api::save_preferences(user_id, &genres).await {
                        Ok(()) => {
                            toaster.success("Preferences saved!");
                            state.loading().set(true);
                            load_recommendations.call(());
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_onboarding_skip: move |_| state.show_onboarding().set(false),
        }

        if let Some(book) = selected() {
            BookModalView {
                activity: ratings.read().get(&book.id).cloned(),
                book: book.clone(),
                on_close: move |_| selected.set(None),
                on_submit_rating: move |submission: RatingSubmission| {
                    selected.set(None);
                    spawn(async move {
                        let result = api::update_activity(
                                user_id,
                                submission.book_id,
                                submission.stars as f64,
                                submission.status.as_str(),
                            )
                            .await;
                        match result {
                            Ok(()) => {
                                toaster.success("Rating submitted!");
                                ratings
                                    .write()
                                    .insert(
                                        submission.book_id,
                                        BookActivity {
                                            rating: submission.stars as f64,
                                            status: submission.status.as_str().to_string(),
                                        },
                                    );
                                reload_stats.call(());
                            }
                            Err(e) => toaster.error(e),
                        }
                    });
                },
                on_issue: move |book_id: i64| {
                    selected.set(None);
                    spawn(async move {
                        match api::issue_book(user_id, book_id).await {
                            Ok(()) => {
                                toaster
                                    .success("Issue request submitted. Waiting for admin approval.")
                            }
                            Err(e) => toaster.error(e),
                        }
                    });
                },
                on_wishlist: move |book_id: i64| {
                    selected.set(None);
                    spawn(async move {
                        let status = ReadingStatus::Wishlist.as_str();
                        match api::update_activity(user_id, book_id, 0.0, status).await {
                            Ok(()) => {
                                toaster.success("Added to wishlist!");
                                reload_stats.call(());
                            }
                            Err(e) => toaster.error(e),
                        }
                    });
                },
                on_delete: move |_| {},
            }
        }
    }
}
