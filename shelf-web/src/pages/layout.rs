use crate::toast::Toaster;
use crate::{api, session, time, Route};
use dioxus::prelude::*;
use shelf_ui::display_types::UserSession;
use shelf_ui::stores::notifications::{NotificationsState, NotificationsStateStoreExt};
use shelf_ui::{NavBarView, NavSection};

const NOTIFICATION_POLL_MS: u64 = 30_000;

#[component]
pub fn AppLayout() -> Element {
    let mut session_signal: Signal<Option<UserSession>> = use_context();
    let current_route = use_route::<Route>();

    use_effect(move || {
        if session_signal.read().is_none() {
            navigator().push(Route::Login {});
        }
    });

    let Some(user) = session_signal() else {
        return rsx! {};
    };

    let notifications = use_store(NotificationsState::default);

    // Poll unread notifications while the layout is mounted; the future is
    // dropped on teardown, which cancels the loop.
    let user_id = user.user_id;
    use_future(move || async move {
        loop {
            match api::fetch_notifications(user_id).await {
                Ok(items) => notifications.items().set(items),
                Err(e) => tracing::warn!("notification poll failed: {e}"),
            }
            time::sleep_ms(NOTIFICATION_POLL_MS).await;
        }
    });

    let mut toaster: Toaster = use_context();

    let active = match current_route {
        Route::Browse {} => NavSection::Browse,
        Route::MyLibrary {} => NavSection::MyLibrary,
        Route::Chat {} => NavSection::Chat,
        Route::RequestBook {} => NavSection::RequestBook,
        Route::Admin {} => NavSection::Admin,
        Route::Profile {} => NavSection::Profile,
        _ => NavSection::Home,
    };

    rsx! {
        NavBarView {
            user_name: user.display_name().to_string(),
            is_admin: user.is_admin(),
            active,
            notifications,
            on_navigate: move |section| {
                let route = match section {
                    NavSection::Home => Route::Home {},
                    NavSection::Browse => Route::Browse {},
                    NavSection::MyLibrary => Route::MyLibrary {},
                    NavSection::Chat => Route::Chat {},
                    NavSection::RequestBook => Route::RequestBook {},
                    NavSection::Admin => Route::Admin {},
                    NavSection::Profile => Route::Profile {},
                };
                notifications.open().set(false);
                navigator().push(route);
            },
            on_toggle_notifications: move |_| {
                let open = *notifications.open().peek();
                notifications.open().set(!open);
            },
            on_mark_read: move |id: i64| {
                spawn(async move {
                    match api::mark_notification_read(id).await {
                        Ok(()) => {
                            let mut items = notifications.items().cloned();
                            items.retain(|n| n.id != id);
                            notifications.items().set(items);
                        }
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_mark_all_read: move |_| {
                spawn(async move {
                    match api::mark_all_notifications_read(user_id).await {
                        Ok(()) => notifications.items().set(Vec::new()),
                        Err(e) => toaster.error(e),
                    }
                });
            },
            on_logout: move |_| {
                session::clear();
                session_signal.set(None);
                navigator().push(Route::Login {});
            },
        }
        Outlet::<Route> {}
    }
}
