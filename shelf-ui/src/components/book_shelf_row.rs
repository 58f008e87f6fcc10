//! Horizontal book shelf row for the home view

use crate::components::book_card::BookCard;
use dioxus::prelude::*;
use shelf_common::Book;

/// A titled horizontal strip of books, scrollable when it overflows.
#[component]
pub fn BookShelfRow(
    title: String,
    books: Vec<Book>,
    on_book_click: EventHandler<i64>,
    /// Optional icon rendered before the title
    #[props(default)]
    icon: Option<Element>,
    /// One-line explanation of why these books are shown
    #[props(default)]
    reason: Option<String>,
) -> Element {
    if books.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "mb-8",
            div { class: "mb-3",
                h2 { class: "text-lg font-bold text-gray-900 flex items-center gap-2",
                    if let Some(icon) = icon {
                        {icon}
                    }
                    "{title}"
                }
                if let Some(reason) = &reason {
                    p { class: "text-sm text-gray-500", "{reason}" }
                }
            }
            div { class: "flex gap-4 overflow-x-auto pb-2",
                for book in books {
                    div { key: "{book.id}", class: "w-36 flex-shrink-0",
                        BookCard { book, on_click: on_book_click }
                    }
                }
            }
        }
    }
}
