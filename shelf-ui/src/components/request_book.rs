//! Request-a-book view - pure view with callbacks

use crate::components::helpers::PageContainer;
use crate::components::text_input::TextInput;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Fields for requesting a book the library does not carry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookRequestInput {
    pub title: String,
    pub author: String,
}

impl BookRequestInput {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}

/// Form for suggesting a new book for the catalog.
#[component]
pub fn RequestBookView(on_submit: EventHandler<BookRequestInput>) -> Element {
    let mut form = use_signal(BookRequestInput::default);
    let is_valid = form.read().is_valid();

    rsx! {
        PageContainer {
            div { class: "max-w-lg mx-auto",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Request a Book" }
                p { class: "text-gray-500 mb-6",
                    "Can't find what you're looking for? Tell us and we'll try to add it."
                }
                div { class: "bg-white border border-gray-200 rounded-lg p-6 space-y-4",
                    TextInput {
                        label: Some("Title".to_string()),
                        value: form.read().title.clone(),
                        oninput: move |v| form.write().title = v,
                    }
                    TextInput {
                        label: Some("Author".to_string()),
                        value: form.read().author.clone(),
                        oninput: move |v| form.write().author = v,
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !is_valid,
                        onclick: move |_| {
                            on_submit.call(form.read().clone());
                            form.set(BookRequestInput::default());
                        },
                        "Submit Request"
                    }
                }

                div { class: "mt-6 bg-blue-50 border border-blue-200 rounded-lg p-4",
                    h2 { class: "font-semibold text-blue-700 mb-2", "Request Guidelines" }
                    ul { class: "text-sm text-gray-600 space-y-1 list-disc list-inside",
                        li { "Please provide the accurate book title and author name" }
                        li { "Requests are reviewed by library administrators" }
                        li { "Popular and educational books are prioritized" }
                        li { "You'll be notified once your request is processed" }
                    }
                }
            }
        }
    }
}
