//! App-wide transient toasts
//!
//! One slot, newest toast wins. Every toast auto-dismisses after 3 seconds;
//! the generation counter keeps a stale timer from clearing a newer toast.

use dioxus::prelude::*;
use shelf_ui::components::{Toast, ToastKind};

const TOAST_DURATION_MS: u64 = 3000;

type Slot = Option<(u64, ToastKind, String)>;

/// Handle for showing toasts from any page. Provided as context by `App`.
#[derive(Clone, Copy)]
pub struct Toaster {
    slot: Signal<Slot>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new(slot: Signal<Slot>) -> Self {
        Self {
            slot,
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.show(ToastKind::Error, message);
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.slot.set(Some((id, kind, message)));

        let mut slot = self.slot;
        spawn(async move {
            crate::time::sleep_ms(TOAST_DURATION_MS).await;
            if slot.peek().as_ref().is_some_and(|(cur, _, _)| *cur == id) {
                slot.set(None);
            }
        });
    }
}

/// Renders the active toast, if any. Mounted once at the app root.
#[component]
pub fn ToastHost(slot: Signal<Slot>) -> Element {
    let current = slot.read().clone();

    rsx! {
        if let Some((_, kind, message)) = current {
            Toast {
                kind,
                message,
                on_dismiss: move |_| slot.set(None),
            }
        }
    }
}
