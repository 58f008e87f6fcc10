//! My Library view component - pure rendering, no data fetching

use crate::components::helpers::PageContainer;
use crate::components::icons::{AlertTriangleIcon, BellIcon, BookOpenIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::display_types::{IssuedBook, NotificationItem};
use crate::stores::shelf::{ShelfState, ShelfStateStoreExt};
use dioxus::prelude::*;

/// My Library view: unread notifications plus books issued to the user
/// with due dates and returns.
#[component]
pub fn MyLibraryView(
    state: ReadStore<ShelfState>,
    on_return: EventHandler<i64>,
    on_mark_read: EventHandler<i64>,
) -> Element {
    let issued = state.issued().read().clone();
    let notifications = state.notifications().read().clone();
    let overdue_count = issued.iter().filter(|b| b.is_overdue).count();

    rsx! {
        PageContainer {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "My Library" }

            if !notifications.is_empty() {
                div { class: "bg-amber-50 border border-amber-200 rounded-lg p-4 mb-6",
                    h2 { class: "font-bold text-amber-800 mb-2 flex items-center gap-2",
                        BellIcon { class: "w-4 h-4" }
                        "Notifications"
                    }
                    for notif in notifications {
                        NotificationRow { key: "{notif.id}", notif, on_mark_read }
                    }
                }
            }

            if overdue_count > 0 {
                div { class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-6 flex items-center gap-2",
                    AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
                    span {
                        {format!("You have {overdue_count} overdue {}", if overdue_count == 1 { "book" } else { "books" })}
                    }
                }
            }

            if issued.is_empty() {
                div { class: "text-center py-12",
                    div { class: "text-gray-300 mb-4",
                        BookOpenIcon { class: "w-16 h-16 mx-auto" }
                    }
                    h2 { class: "text-xl font-bold text-gray-700 mb-2", "No books issued" }
                    p { class: "text-gray-500", "Issue a book from the catalog to see it here." }
                }
            } else {
                div { class: "space-y-4",
                    for book in issued {
                        IssuedBookRow { key: "{book.issue_id}", book, on_return }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(notif: NotificationItem, on_mark_read: EventHandler<i64>) -> Element {
    let id = notif.id;

    rsx! {
        div { class: "flex items-center justify-between gap-4 py-2 border-b border-amber-200/60 last:border-b-0",
            span { class: "text-sm text-amber-900", "{notif.message}" }
            ChromelessButton {
                class: Some(
                    "text-xs text-amber-700 hover:text-amber-900 underline flex-shrink-0".to_string(),
                ),
                onclick: move |_| on_mark_read.call(id),
                "Mark read"
            }
        }
    }
}

#[component]
fn IssuedBookRow(book: IssuedBook, on_return: EventHandler<i64>) -> Element {
    let issue_id = book.issue_id;
    let due = book.due_date.format("%b %e, %Y").to_string();

    rsx! {
        div { class: "bg-white border border-gray-200 rounded-lg p-4 flex items-center justify-between gap-4",
            div { class: "min-w-0",
                h3 { class: "font-semibold text-gray-900 truncate", "{book.book_title}" }
                p { class: "text-sm text-gray-500 truncate", "by {book.book_author}" }
                if book.is_overdue {
                    p { class: "text-sm text-red-600 mt-1",
                        {format!("Overdue by {} {}", book.days_overdue, if book.days_overdue == 1 { "day" } else { "days" })}
                    }
                } else {
                    p { class: "text-sm text-gray-500 mt-1", "Due {due}" }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                onclick: move |_| on_return.call(issue_id),
                "Return"
            }
        }
    }
}
