//! Standard page width container

use dioxus::prelude::*;

/// Wraps page content in the shared max-width container
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8", {children} }
    }
}
