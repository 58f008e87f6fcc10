//! Transient toast notification
//!
//! The view is pure: callers own the 3-second auto-dismiss timer and
//! call `on_dismiss` when it fires (or when the user clicks the X).

use crate::components::icons::{AlertTriangleIcon, CheckIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Visual style of a toast
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

/// A dismissible toast pinned to the top-right corner
#[component]
pub fn Toast(
    kind: ToastKind,
    /// The message to display
    message: String,
    /// Called when the user dismisses the toast
    on_dismiss: EventHandler<()>,
) -> Element {
    let (container, icon) = match kind {
        ToastKind::Success => (
            "fixed top-20 right-4 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg z-50 max-w-md",
            rsx! {
                CheckIcon { class: "w-5 h-5 flex-shrink-0" }
            },
        ),
        ToastKind::Error => (
            "fixed top-20 right-4 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg z-50 max-w-md",
            rsx! {
                AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
            },
        ),
    };

    rsx! {
        div { class: container,
            div { class: "flex items-center gap-3",
                {icon}
                span { class: "flex-1", "{message}" }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
