use crate::api;
use crate::toast::Toaster;
use dioxus::prelude::*;
use shelf_ui::display_types::UserSession;
use shelf_ui::stores::shelf::{ShelfState, ShelfStateStoreExt};
use shelf_ui::MyLibraryView;

#[component]
pub fn MyLibrary() -> Element {
    let session: Signal<Option<UserSession>> = use_context();
    let Some(user) = session() else {
        return rsx! {};
    };
    let user_id = user.user_id;

    let mut toaster: Toaster = use_context();
    let state = use_store(ShelfState::default);

    let reload = use_callback(move |()| {
        spawn(async move {
            match api::fetch_issued_books(user_id).await {
                Ok(issued) => state.issued().set(issued),
                Err(e) => toaster.error(e),
            }
            match api::fetch_notifications(user_id).await {
                Ok(items) => state.notifications().set(items),
                Err(e) => tracing::warn!("notification fetch failed: {e}"),
            }
        });
    });
    use_hook(move || reload.call(()));

    rsx! {
        MyLibraryView {
            state,
            on_return: move |issue_id: i64| {
                spawn(async move {
                    match api::return_book(issue_id).await {
                        Ok(()) => {
                            toaster.success("Book returned!");
                            reload.call(());
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_mark_read: move |notification_id: i64| {
                spawn(async move {
                    match api::mark_notification_read(notification_id).await {
                        Ok(()) => {
                            state
                                .notifications()
                                .write()
                                .retain(|n| n.id != notification_id);
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
        }
    }
}
