//! Error display component

use dioxus::prelude::*;

/// Generic error display box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg mb-4",
            p { "{message}" }
        }
    }
}
