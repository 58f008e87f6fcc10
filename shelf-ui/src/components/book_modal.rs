//! Book detail modal - pure view with callbacks
//!
//! Rendered by the caller only while a book is selected, so it draws its
//! own overlay instead of going through `Modal`. The rating stars and the
//! status buttons share one pending selection: picking stars then a status
//! submits both in a single activity update.

use crate::components::helpers::ConfirmDialogView;
use crate::components::icons::{BookmarkIcon, ImageIcon, TrashIcon, XIcon};
use crate::components::star_rating::{StarRating, StarRatingInput};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::display_types::{BookActivity, ReadingStatus};
use dioxus::prelude::*;
use shelf_common::Book;

/// Payload for a rating/status submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingSubmission {
    pub book_id: i64,
    pub stars: i64,
    pub status: ReadingStatus,
}

/// Book detail modal with rating, issue, wishlist and admin delete actions.
#[component]
pub fn BookModalView(
    book: Book,
    /// The user's recorded activity for this book, if any
    #[props(default)]
    activity: Option<BookActivity>,
    #[props(default)] is_admin: bool,
    on_close: EventHandler<()>,
    on_submit_rating: EventHandler<RatingSubmission>,
    on_issue: EventHandler<i64>,
    on_wishlist: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let book_id = book.id;
    let cover = book.cover_url();

    // Pre-select the user's previous stars when re-opening a rated book
    let initial_stars = activity
        .as_ref()
        .map(|a| a.rating.floor() as i64)
        .unwrap_or(0);
    let mut pending_stars = use_signal(|| initial_stars);
    let mut confirm_delete = use_signal(|| false);
    let confirm_delete_read: ReadSignal<bool> = confirm_delete.into();

    let submit = move |status: ReadingStatus| {
        on_submit_rating.call(RatingSubmission {
            book_id,
            stars: pending_stars(),
            status,
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-xl shadow-xl max-w-2xl w-full max-h-[90vh] overflow-y-auto",
                onclick: move |e| e.stop_propagation(),

                div { class: "flex justify-end p-2",
                    ChromelessButton {
                        class: Some("text-gray-400 hover:text-gray-600 p-1".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                div { class: "px-6 pb-6 flex flex-col sm:flex-row gap-6",
                    div { class: "w-40 flex-shrink-0 mx-auto sm:mx-0",
                        div { class: "aspect-[3/4] bg-gray-100 rounded-lg overflow-hidden flex items-center justify-center",
                            if cover.is_empty() {
                                ImageIcon { class: "w-12 h-12 text-gray-300" }
                            } else {
                                img {
                                    src: "{cover}",
                                    alt: "Cover for {book.title}",
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                    }

                    div { class: "flex-1 min-w-0",
                        h2 { class: "text-2xl font-bold text-gray-900 mb-1", "{book.title}" }
                        p { class: "text-gray-500 mb-2", "by {book.author}" }
                        div { class: "flex items-center gap-3 mb-4",
                            StarRating { rating: book.rating, show_value: true }
                            if !book.genre.is_empty() {
                                span { class: "text-xs px-2 py-0.5 bg-indigo-50 text-indigo-600 rounded-full",
                                    "{book.genre}"
                                }
                            }
                        }
                        if !book.description.is_empty() {
                            p { class: "text-sm text-gray-600 mb-4", "{book.description}" }
                        }

                        div { class: "border-t border-gray-100 pt-4",
                            p { class: "text-sm font-medium text-gray-700 mb-2", "Your rating" }
                            StarRatingInput {
                                value: pending_stars(),
                                on_select: move |stars| pending_stars.set(stars),
                            }
                        }

                        div { class: "flex flex-wrap gap-2 mt-4",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Small,
                                disabled: pending_stars() == 0,
                                onclick: move |_| submit(ReadingStatus::Read),
                                "Rate & Mark Read"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                size: ButtonSize::Small,
                                onclick: move |_| submit(ReadingStatus::Reading),
                                "Currently Reading"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                size: ButtonSize::Small,
                                onclick: move |_| on_wishlist.call(book_id),
                                BookmarkIcon { class: "w-4 h-4" }
                                "Wishlist"
                            }
                            Button {
                                variant: ButtonVariant::Success,
                                size: ButtonSize::Small,
                                onclick: move |_| on_issue.call(book_id),
                                "Issue Book"
                            }
                            if is_admin {
                                Button {
                                    variant: ButtonVariant::Danger,
                                    size: ButtonSize::Small,
                                    onclick: move |_| confirm_delete.set(true),
                                    TrashIcon { class: "w-4 h-4" }
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmDialogView {
            is_open: confirm_delete_read,
            title: "Delete Book".to_string(),
            message: format!("Remove \"{}\" from the catalog? This cannot be undone.", book.title),
            confirm_label: "Delete".to_string(),
            on_confirm: move |_| {
                confirm_delete.set(false);
                on_delete.call(book_id);
            },
            on_cancel: move |_| confirm_delete.set(false),
        }
    }
}
