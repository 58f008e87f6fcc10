//! Chat assistant view component - pure rendering, no data fetching

use crate::components::helpers::PageContainer;
use crate::components::icons::{SendIcon, SparklesIcon, TrashIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::display_types::{ChatMessage, ChatSender};
use crate::stores::chat::{ChatState, ChatStateStoreExt};
use dioxus::prelude::*;

/// Chat view: transcript, typing indicator and message composer.
#[component]
pub fn ChatView(
    state: ReadStore<ChatState>,
    on_send: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let messages = state.messages().read().clone();
    let sending = *state.sending().read();

    let mut draft = use_signal(String::new);

    let mut submit = move || {
        let text = draft.read().trim().to_string();
        if !text.is_empty() && !sending {
            on_send.call(text);
            draft.set(String::new());
        }
    };

    rsx! {
        PageContainer {
            div { class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900 flex items-center gap-2",
                    SparklesIcon { class: "w-6 h-6 text-indigo-500" }
                    "Book Assistant"
                }
                if !messages.is_empty() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_clear.call(()),
                        TrashIcon { class: "w-4 h-4" }
                        "Clear Chat"
                    }
                }
            }

            div { class: "bg-white border border-gray-200 rounded-lg flex flex-col h-[60vh]",
                div { class: "flex-1 overflow-y-auto p-4 space-y-3",
                    if messages.is_empty() {
                        div { class: "h-full flex items-center justify-center text-center",
                            p { class: "text-gray-400",
                                "Ask for a recommendation, like \"suggest me a fantasy book\"."
                            }
                        }
                    }
                    for (i , message) in messages.iter().enumerate() {
                        ChatBubble { key: "{i}", message: message.clone() }
                    }
                    if sending {
                        div { class: "flex justify-start",
                            div { class: "bg-gray-100 text-gray-400 px-4 py-2 rounded-2xl rounded-bl-sm text-sm",
                                "Thinking..."
                            }
                        }
                    }
                }

                div { class: "border-t border-gray-200 p-3 flex gap-2",
                    input {
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-lg text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        r#type: "text",
                        placeholder: "Ask about books...",
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                    ChromelessButton {
                        class: Some(
                            "bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg px-4 py-2 disabled:opacity-50 disabled:cursor-not-allowed"
                                .to_string(),
                        ),
                        disabled: sending,
                        aria_label: Some("Send".to_string()),
                        onclick: move |_| submit(),
                        SendIcon { class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let (row, bubble) = match message.sender {
        ChatSender::User => (
            "flex justify-end",
            "bg-indigo-600 text-white px-4 py-2 rounded-2xl rounded-br-sm max-w-[75%] whitespace-pre-wrap",
        ),
        ChatSender::Assistant => (
            "flex justify-start",
            "bg-gray-100 text-gray-800 px-4 py-2 rounded-2xl rounded-bl-sm max-w-[75%] whitespace-pre-wrap",
        ),
    };

    rsx! {
        div { class: row,
            div { class: bubble, "{message.content}" }
        }
    }
}
