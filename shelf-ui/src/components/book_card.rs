//! Book card component - pure view with callbacks

use crate::components::icons::ImageIcon;
use crate::components::star_rating::StarRating;
use dioxus::prelude::*;
use shelf_common::Book;

/// Individual book card
///
/// Pure view component - cover, title, author, genre badge and rating.
/// Navigation is handled via the on_click callback, not direct router calls.
#[component]
pub fn BookCard(book: Book, on_click: EventHandler<i64>) -> Element {
    let book_id = book.id;
    let cover = book.cover_url();
    let genre = book.genre.clone();

    rsx! {
        div {
            class: "bg-white rounded-lg overflow-hidden shadow hover:shadow-lg transition-shadow duration-300 cursor-pointer",
            "data-testid": "book-card",
            onclick: move |_| on_click.call(book_id),
            div { class: "aspect-[3/4] bg-gray-100 flex items-center justify-center",
                if cover.is_empty() {
                    ImageIcon { class: "w-12 h-12 text-gray-300" }
                } else {
                    img {
                        src: "{cover}",
                        alt: "Cover for {book.title}",
                        class: "w-full h-full object-cover",
                        loading: "lazy",
                    }
                }
            }
            div { class: "p-3",
                h3 {
                    class: "font-semibold text-gray-900 text-sm mb-0.5 truncate",
                    title: "{book.title}",
                    "{book.title}"
                }
                p {
                    class: "text-gray-500 text-xs truncate mb-2",
                    title: "{book.author}",
                    "{book.author}"
                }
                div { class: "flex items-center justify-between gap-2",
                    StarRating { rating: book.rating, show_value: true }
                    if !genre.is_empty() {
                        span {
                            class: "text-[10px] px-2 py-0.5 bg-indigo-50 text-indigo-600 rounded-full truncate",
                            "{genre}"
                        }
                    }
                }
            }
        }
    }
}
