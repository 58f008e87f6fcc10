//! Profile view - pure view with callbacks

use crate::components::helpers::PageContainer;
use crate::components::icons::{StarIcon, XIcon};
use crate::components::text_input::TextInput;
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::display_types::{BookActivity, UserSession, UserStats};
use dioxus::prelude::*;

/// Profile view: display name, reading stats, favorite genres and recent
/// reading activity.
#[component]
pub fn ProfileView(
    user: UserSession,
    stats: UserStats,
    /// The user's saved favorite genres
    favorite_genres: Vec<String>,
    /// Genres available to add, most frequent in the catalog first
    all_genres: Vec<String>,
    /// Rated books as (title, activity), highest rated first
    #[props(default)]
    recent_activity: Vec<(String, BookActivity)>,
    on_rename: EventHandler<String>,
    /// Called with the full updated genre list
    on_save_genres: EventHandler<Vec<String>>,
) -> Element {
    let mut name_draft = use_signal(|| user.display_name().to_string());
    let name_changed = name_draft.read().trim() != user.display_name()
        && !name_draft.read().trim().is_empty();

    let addable: Vec<String> = all_genres
        .iter()
        .filter(|g| !favorite_genres.contains(g))
        .cloned()
        .collect();

    rsx! {
        PageContainer {
            div { class: "max-w-2xl mx-auto",
                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Profile" }

                section { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                    h2 { class: "text-lg font-bold text-gray-900 mb-4", "Account" }
                    p { class: "text-sm text-gray-500 mb-4", "{user.email}" }
                    div { class: "flex items-end gap-3",
                        TextInput {
                            label: Some("Display name".to_string()),
                            value: name_draft.read().clone(),
                            oninput: move |v| name_draft.set(v),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            disabled: !name_changed,
                            onclick: move |_| on_rename.call(name_draft.read().trim().to_string()),
                            "Save"
                        }
                    }
                }

                section { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                    h2 { class: "text-lg font-bold text-gray-900 mb-4", "Reading Stats" }
                    div { class: "grid grid-cols-2 sm:grid-cols-4 gap-4 text-center",
                        div {
                            p { class: "text-2xl font-bold text-gray-900", "{stats.books_this_month}" }
                            p { class: "text-xs text-gray-500", "This month" }
                        }
                        div {
                            p { class: "text-2xl font-bold text-gray-900", "{stats.total_books_read}" }
                            p { class: "text-xs text-gray-500", "Total read" }
                        }
                        div {
                            p { class: "text-2xl font-bold text-gray-900", "{stats.currently_reading}" }
                            p { class: "text-xs text-gray-500", "Reading" }
                        }
                        div {
                            p { class: "text-2xl font-bold text-gray-900", "{stats.wishlist_count}" }
                            p { class: "text-xs text-gray-500", "Wishlist" }
                        }
                    }
                }

                section { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                    h2 { class: "text-lg font-bold text-gray-900 mb-4", "Reading Activity" }
                    if recent_activity.is_empty() {
                        p { class: "text-sm text-gray-500 text-center py-4",
                            "No reading activity yet. Start rating some books!"
                        }
                    } else {
                        div { class: "space-y-2",
                            for (title , activity) in recent_activity {
                                div {
                                    key: "{title}",
                                    class: "flex items-center justify-between gap-4 bg-gray-50 rounded-lg px-4 py-3",
                                    div { class: "min-w-0",
                                        p { class: "font-medium text-gray-900 truncate", "{title}" }
                                        p { class: "text-sm text-gray-500 capitalize", "{activity.status}" }
                                    }
                                    if activity.rating > 0.0 {
                                        span { class: "flex items-center gap-1 flex-shrink-0",
                                            StarIcon { class: "w-4 h-4 text-yellow-400" }
                                            span { class: "font-bold text-gray-900",
                                                {format!("{:.0}", activity.rating)}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section { class: "bg-white border border-gray-200 rounded-lg p-6",
                    h2 { class: "text-lg font-bold text-gray-900 mb-4", "Favorite Genres" }
                    if favorite_genres.is_empty() {
                        p { class: "text-sm text-gray-500 mb-3",
                            "No favorites yet. Add some to improve your recommendations."
                        }
                    } else {
                        div { class: "flex flex-wrap gap-2 mb-4",
                            for genre in favorite_genres.clone() {
                                span {
                                    key: "{genre}",
                                    class: "inline-flex items-center gap-1 px-3 py-1 bg-indigo-50 text-indigo-700 rounded-full text-sm",
                                    "{genre}"
                                    ChromelessButton {
                                        class: Some(
                                            "text-indigo-300 hover:text-indigo-700".to_string(),
                                        ),
                                        aria_label: Some(format!("Remove {genre}")),
                                        onclick: {
                                            let favorite_genres = favorite_genres.clone();
                                            let genre = genre.clone();
                                            move |_| {
                                                let updated: Vec<String> = favorite_genres
                                                    .iter()
                                                    .filter(|g| **g != genre)
                                                    .cloned()
                                                    .collect();
                                                on_save_genres.call(updated);
                                            }
                                        },
                                        XIcon { class: "w-3 h-3" }
                                    }
                                }
                            }
                        }
                    }
                    if !addable.is_empty() {
                        div { class: "flex flex-wrap gap-2",
                            for genre in addable {
                                ChromelessButton {
                                    key: "{genre}",
                                    class: Some(
                                        "px-3 py-1 border border-gray-300 text-gray-600 rounded-full text-sm hover:border-indigo-400 hover:text-indigo-600"
                                            .to_string(),
                                    ),
                                    onclick: {
                                        let favorite_genres = favorite_genres.clone();
                                        let genre = genre.clone();
                                        move |_| {
                                            let mut updated = favorite_genres.clone();
                                            updated.push(genre.clone());
                                            on_save_genres.call(updated);
                                        }
                                    },
                                    "+ {genre}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
