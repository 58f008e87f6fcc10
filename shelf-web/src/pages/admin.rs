use crate::api;
use crate::toast::Toaster;
use crate::Route;
use dioxus::prelude::*;
use shelf_ui::display_types::UserSession;
use shelf_ui::stores::admin::{AdminState, AdminStateStoreExt};
use shelf_ui::{AdminView, NewBookInput};

#[component]
pub fn Admin() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };

    // Role gate: non-admins land back on Home
    if !user.is_admin() {
        navigator().push(Route::Home {});
        return rsx! {};
    }

    let mut toaster: Toaster = use_context();
    let state = use_store(AdminState::default);

    let reload = use_callback(move |()| {
        spawn(async move {
            match api::fetch_pending_issues().await {
                Ok(pending) => state.pending_issues().set(pending),
                Err(e) => toaster.error(e),
            }
            match api::fetch_book_requests().await {
                Ok(requests) => state.book_requests().set(requests),
                Err(e) => toaster.error(e),
            }
        });
    });
    use_hook(move || reload.call(()));

    rsx! {
        AdminView {
            state,
            on_add_book: move |book: NewBookInput| {
                spawn(async move {
                    let result = api::add_book(
                            book.title.trim(),
                            book.author.trim(),
                            book.genre.trim(),
                            book.description.trim(),
                            book.cover_image.trim(),
                        )
                        .await;
                    match result {
                        Ok(()) => toaster.success("Book added to catalog!"),
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_approve_issue: move |issue_id: i64| {
                spawn(async move {
                    match api::approve_issue(issue_id).await {
                        Ok(()) => {
                            toaster.success("Issue approved.");
                            reload.call(());
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_fulfill_request: move |request_id: i64| {
                spawn(async move {
                    match api::fulfill_book_request(request_id).await {
                        Ok(()) => {
                            toaster.success("Request fulfilled.");
                            reload.call(());
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_reject_request: move |request_id: i64| {
                spawn(async move {
                    match api::reject_book_request(request_id).await {
                        Ok(()) => {
                            toaster.success("Request rejected.");
                            reload.call(());
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
        }
    }
}
