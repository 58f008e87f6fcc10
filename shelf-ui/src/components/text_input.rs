//! Labeled text input component

use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500";

/// Text input with an optional label above it
#[component]
pub fn TextInput(
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "w-full",
            if let Some(label) = &label {
                label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            }
            input {
                class: INPUT_CLASS,
                r#type,
                value: "{value}",
                placeholder: placeholder.as_deref(),
                disabled,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Multi-line text area with an optional label
#[component]
pub fn TextArea(
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default = 3)] rows: i64,
) -> Element {
    rsx! {
        div { class: "w-full",
            if let Some(label) = &label {
                label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            }
            textarea {
                class: INPUT_CLASS,
                rows: "{rows}",
                value: "{value}",
                placeholder: placeholder.as_deref(),
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}
