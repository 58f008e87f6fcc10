use crate::api;
use crate::toast::Toaster;
use chrono::Utc;
use dioxus::prelude::*;
use shelf_ui::display_types::{ChatMessage, ChatSender, UserSession};
use shelf_ui::stores::chat::{ChatState, ChatStateStoreExt};
use shelf_ui::ChatView;

#[component]
pub fn Chat() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };
    let user_id = user.user_id;

    let mut toaster: Toaster = use_context();
    let state = use_store(ChatState::default);

    use_future(move || async move {
        match api::fetch_chat_history(user_id).await {
            Ok(messages) => state.messages().set(messages),
            Err(e) => tracing::warn!("chat history fetch failed: {e}"),
        }
    });

    rsx! {
        ChatView {
            state,
            on_send: move |text: String| {
                // Optimistic append: the user bubble shows immediately, the
                // assistant bubble lands when the backend answers.
                state
                    .messages()
                    .write()
                    .push(ChatMessage {
                        sender: ChatSender::User,
                        content: text.clone(),
                        timestamp: Utc::now(),
                    });
                state.sending().set(true);
                spawn(async move {
                    let content = match api::send_chat_message(user_id, &text).await {
                        Ok(reply) => reply,
                        Err(e) => {
                            tracing::warn!("chat send failed: {e}");
                            "Sorry, I'm having trouble right now. Please try again later."
                                .to_string()
                        }
                    };
                    state
                        .messages()
                        .write()
                        .push(ChatMessage {
                            sender: ChatSender::Assistant,
                            content,
                            timestamp: Utc::now(),
                        });
                    state.sending().set(false);
                });
            },
            on_clear: move |_| {
                spawn(async move {
                    match api::clear_chat_history(user_id).await {
                        Ok(()) => state.messages().set(Vec::new()),
                        Err(e) => toaster.error(e),
                    }
                });
            },
        }
    }
}
