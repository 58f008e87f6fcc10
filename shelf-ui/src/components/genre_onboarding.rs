//! First-visit genre onboarding modal

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// One-time modal asking a new user to pick favorite genres.
///
/// Save is disabled until at least one genre is selected; Skip closes
/// without recording preferences.
#[component]
pub fn GenreOnboardingView(
    /// Genre choices, most frequent in the catalog first
    genres: Vec<String>,
    on_save: EventHandler<Vec<String>>,
    on_skip: EventHandler<()>,
) -> Element {
    let mut selected = use_signal(Vec::<String>::new);
    let count = selected.read().len();

    rsx! {
        div { class: "fixed inset-0 bg-black/70 z-50 flex items-center justify-center p-4",
            div { class: "bg-white rounded-2xl max-w-2xl w-full p-8 shadow-2xl",
                div { class: "text-center mb-8",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-3", "Welcome!" }
                    p { class: "text-gray-600",
                        "Select your favorite genres to get personalized book recommendations"
                    }
                }

                div { class: "grid grid-cols-2 md:grid-cols-3 gap-3 mb-8 max-h-60 overflow-y-auto",
                    for genre in genres {
                        GenreChip {
                            key: "{genre}",
                            genre: genre.clone(),
                            is_selected: selected.read().contains(&genre),
                            on_toggle: move |g: String| {
                                let mut list = selected.write();
                                if let Some(pos) = list.iter().position(|s| *s == g) {
                                    list.remove(pos);
                                } else {
                                    list.push(g);
                                }
                            },
                        }
                    }
                }

                div { class: "text-center",
                    p { class: "text-sm text-gray-500 mb-4", "Selected: {count} genres" }
                    div { class: "flex justify-center gap-3",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_skip.call(()),
                            "Skip for now"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            disabled: count == 0,
                            onclick: move |_| on_save.call(selected.read().clone()),
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GenreChip(genre: String, is_selected: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if is_selected {
        "p-3 rounded-lg border-2 bg-indigo-600 border-indigo-600 text-white shadow transition-colors"
    } else {
        "p-3 rounded-lg border-2 border-gray-300 text-gray-700 hover:border-indigo-400 hover:bg-gray-50 transition-colors"
    };

    rsx! {
        button {
            class,
            onclick: move |_| on_toggle.call(genre.clone()),
            "{genre}"
        }
    }
}
