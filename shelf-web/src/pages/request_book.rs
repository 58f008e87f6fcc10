use crate::api;
use crate::toast::Toaster;
use dioxus::prelude::*;
use shelf_ui::display_types::UserSession;
use shelf_ui::{BookRequestInput, RequestBookView};

#[component]
pub fn RequestBook() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };
    let user_id = user.user_id;

    let mut toaster: Toaster = use_context();

    rsx! {
        RequestBookView {
            on_submit: move |request: BookRequestInput| {
                spawn(async move {
                    let result = api::request_book(
                            user_id,
                            request.title.trim(),
                            request.author.trim(),
                        )
                        .await;
                    match result {
                        Ok(()) => toaster.success("Book request submitted!"),
                        Err(e) => toaster.error(e),
                    }
                });
            },
        }
    }
}
