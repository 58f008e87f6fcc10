//! Star rating displays

use crate::components::icons::StarIcon;
use dioxus::prelude::*;

/// Read-only star row with the numeric rating alongside.
///
/// Stars at or below the (rounded-down) rating render filled, the rest
/// grayed out. Ratings are on the 1-5 scale.
#[component]
pub fn StarRating(rating: f64, #[props(default)] show_value: bool) -> Element {
    let filled = rating.floor() as i64;

    rsx! {
        div { class: "flex items-center gap-1",
            for star in 1..=5i64 {
                StarIcon {
                    class: (if star <= filled { "w-4 h-4 text-yellow-400" } else { "w-4 h-4 text-gray-300" }),
                }
            }
            if show_value {
                span { class: "text-sm text-gray-600 ml-1", {format!("{rating:.1}")} }
            }
        }
    }
}

/// Clickable star row for submitting a rating (1-5 whole stars).
#[component]
pub fn StarRatingInput(
    /// Currently selected rating, 0 when nothing picked yet
    value: i64,
    on_select: EventHandler<i64>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-1",
            for star in 1..=5i64 {
                button {
                    class: "p-0.5 hover:scale-110 transition-transform",
                    aria_label: "Rate {star} stars",
                    onclick: move |_| on_select.call(star),
                    StarIcon {
                        class: (if star <= value { "w-6 h-6 text-yellow-400" } else { "w-6 h-6 text-gray-300 hover:text-yellow-200" }),
                    }
                }
            }
        }
    }
}
