//! Styled wrapper over the native `<select>` element
//!
//! ```ignore
//! Select {
//!     value: genre.clone(),
//!     onchange: move |val: String| { ... },
//!     SelectOption { value: "", label: "All Genres" }
//!     SelectOption { value: "Fantasy", label: "Fantasy" }
//! }
//! ```

use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;

/// Context shared between Select and its SelectOption children
#[derive(Clone)]
struct SelectContext {
    current_value: String,
}

/// Native select styled to match the rest of the form controls
#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Called when selection changes
    onchange: EventHandler<String>,
    /// Whether the select is disabled
    #[props(default)]
    disabled: bool,
    /// Options (SelectOption children)
    children: Element,
) -> Element {
    use_context_provider(|| SelectContext {
        current_value: value.clone(),
    });

    rsx! {
        div { class: "relative inline-block w-full",
            select {
                class: "w-full appearance-none px-3 py-2 pr-8 border border-gray-300 rounded-lg bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed",
                value: "{value}",
                disabled,
                onchange: move |e| onchange.call(e.value()),
                {children}
            }
            div { class: "pointer-events-none absolute inset-y-0 right-2 flex items-center",
                ChevronDownIcon { class: "w-4 h-4 text-gray-400" }
            }
        }
    }
}

/// An option within a Select
#[component]
pub fn SelectOption(
    /// Value for this option
    value: String,
    /// Display label text
    label: String,
) -> Element {
    let ctx = use_context::<SelectContext>();
    let is_selected = ctx.current_value == value;

    rsx! {
        option { value: "{value}", selected: is_selected, "{label}" }
    }
}
