use crate::toast::Toaster;
use crate::{api, dom};
use dioxus::prelude::*;
use shelf_common::{top_genres, Book, CatalogFilter, FilterConfig, SearchFields};
use shelf_ui::display_types::{BookActivity, ReadingStatus, UserSession};
use shelf_ui::stores::catalog::{CatalogState, CatalogStateStoreExt};
use shelf_ui::{BookModalView, BrowseView, RatingSubmission};
use std::collections::HashMap;

const GENRE_OPTION_LIMIT: usize = 25;

fn browse_config() -> FilterConfig {
    FilterConfig {
        page_size: 20,
        pagination_enabled: true,
        search_fields: SearchFields::TitleAndAuthor,
    }
}

#[component]
pub fn Browse() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };
    let user_id = user.user_id;
    let is_admin = user.is_admin();

    let mut toaster: Toaster = use_context();

    let state = use_store(|| CatalogState {
        filter: CatalogFilter::new(browse_config()),
        loading: true,
        error: None,
    });
    let mut catalog = use_signal(Vec::<Book>::new);
    let mut genres = use_signal(Vec::<String>::new);
    let mut ratings = use_signal(HashMap::<i64, BookActivity>::new);
    let mut selected = use_signal(|| None::<Book>);

    // One snapshot per view session; filter state resets with it.
    let reload = use_callback(move |()| {
        spawn(async move {
            state.loading().set(true);
            match api::fetch_books().await {
                Ok(books) => {
                    genres.set(top_genres(&books, GENRE_OPTION_LIMIT));
                    catalog.set(books.clone());
                    state
                        .filter()
                        .set(CatalogFilter::with_catalog(books, browse_config()));
                    state.error().set(None);
                }
                Err(e) => state.error().set(Some(e)),
            }
            state.loading().set(false);
        });
    });
    use_hook(move || reload.call(()));

    use_future(move || async move {
        match api::fetch_user_ratings(user_id).await {
            Ok(map) => ratings.set(map),
            Err(e) => tracing::warn!("ratings fetch failed: {e}"),
        }
    });

    let close_modal = move |_| selected.set(None);

    rsx! {
        BrowseView {
            state,
            genres: genres(),
            on_search_change: move |term: String| {
                let y = dom::scroll_y();
                let mut filter = state.filter().cloned();
                filter.set_search_term(term);
                state.filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_genre_change: move |genre: String| {
                let y = dom::scroll_y();
                let mut filter = state.filter().cloned();
                filter.set_genre_filter(genre);
                state.filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_rating_change: move |min_rating: f64| {
                let y = dom::scroll_y();
                let mut filter = state.filter().cloned();
                filter.set_rating_filter(min_rating);
                state.filter().set(filter);
                dom::restore_scroll_after_render(y);
            },
            on_reset: move |_| {
                let mut filter = state.filter().cloned();
                filter.reset_filters();
                state.filter().set(filter);
            },
            on_load_more: move |_| {
                let mut filter = state.filter().cloned();
                filter.load_more();
                state.filter().set(filter);
            },
            on_book_click: move |book_id: i64| {
                let book = catalog.read().iter().find(|b| b.id == book_id).cloned();
                selected.set(book);
            },
        }

        if let Some(book) = selected() {
            BookModalView {
                activity: ratings.read().get(&book.id).cloned(),
                book: book.clone(),
                is_admin,
                on_close: close_modal,
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
                            Ok(()) => toaster.success("Added to wishlist!"),
                            Err(e) => toaster.error(e),
                        }
                    });
                },
                on_delete: move |book_id: i64| {
                    selected.set(None);
                    spawn(async move {
                        match api::delete_book(book_id).await {
                            Ok(()) => {
                                toaster.success("Book deleted.");
                                reload.call(());
                            }
                            Err(e) => toaster.error(e),
                        }
                    });
                },
            }
        }
    }
}
