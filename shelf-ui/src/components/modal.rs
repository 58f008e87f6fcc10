//! Modal overlay component
//!
//! Renders a fixed full-screen backdrop with the content centered inside.
//! Clicking the backdrop closes the modal; clicks inside the content are
//! stopped so they do not bubble up to the backdrop handler.

use dioxus::prelude::*;

/// Modal component with a dimmed backdrop
#[component]
pub fn Modal(
    /// Controls whether the modal is rendered
    is_open: ReadSignal<bool>,
    /// Called when the backdrop is clicked
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
) -> Element {
    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div { class: "max-h-[90vh] overflow-y-auto", onclick: move |e| e.stop_propagation(), {children} }
        }
    }
}
