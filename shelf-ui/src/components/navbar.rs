//! Top navigation bar - pure view with callbacks
//!
//! Navigation is forwarded through `on_navigate` with a `NavSection` so the
//! app shell owns the router. The bell dropdown renders unread notifications
//! from `NotificationsState`, refreshed by the shell's polling loop.

use crate::components::icons::{BellIcon, BookOpenIcon, CheckIcon, LogOutIcon, UserIcon};
use crate::components::ChromelessButton;
use crate::stores::notifications::{NotificationsState, NotificationsStateStoreExt};
use dioxus::prelude::*;

/// Top-level app sections reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Browse,
    MyLibrary,
    Chat,
    RequestBook,
    Admin,
    Profile,
}

impl NavSection {
    fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Browse => "Browse",
            NavSection::MyLibrary => "My Library",
            NavSection::Chat => "Assistant",
            NavSection::RequestBook => "Request a Book",
            NavSection::Admin => "Admin",
            NavSection::Profile => "Profile",
        }
    }
}

/// Navigation bar with section links, notification bell and user menu.
#[component]
pub fn NavBarView(
    user_name: String,
    #[props(default)] is_admin: bool,
    active: NavSection,
    notifications: ReadStore<NotificationsState>,
    on_navigate: EventHandler<NavSection>,
    on_toggle_notifications: EventHandler<()>,
    on_mark_read: EventHandler<i64>,
    on_mark_all_read: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let items = notifications.items().read().clone();
    let open = *notifications.open().read();
    let unread = items.len();

    let mut sections = vec![
        NavSection::Home,
        NavSection::Browse,
        NavSection::MyLibrary,
        NavSection::Chat,
        NavSection::RequestBook,
    ];
    if is_admin {
        sections.push(NavSection::Admin);
    }

    rsx! {
        nav { class: "bg-white border-b border-gray-200 sticky top-0 z-40",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    div { class: "flex items-center gap-8",
                        div { class: "flex items-center gap-2 text-indigo-600 font-bold text-lg",
                            BookOpenIcon { class: "w-6 h-6" }
                            "Shelf"
                        }
                        div { class: "hidden md:flex items-center gap-1",
                            for section in sections {
                                NavLink {
                                    section,
                                    is_active: section == active,
                                    on_navigate,
                                }
                            }
                        }
                    }

                    div { class: "flex items-center gap-2",
                        div { class: "relative",
                            ChromelessButton {
                                class: Some(
                                    "relative p-2 text-gray-500 hover:text-gray-900 hover:bg-gray-100 rounded-lg"
                                        .to_string(),
                                ),
                                aria_label: Some("Notifications".to_string()),
                                onclick: move |_| on_toggle_notifications.call(()),
                                BellIcon { class: "w-5 h-5" }
                                if unread > 0 {
                                    span { class: "absolute top-1 right-1 bg-red-500 text-white text-[10px] rounded-full min-w-[16px] h-4 px-1 flex items-center justify-center",
                                        "{unread}"
                                    }
                                }
                            }
                            if open {
                                NotificationDropdown {
                                    notifications,
                                    on_mark_read,
                                    on_mark_all_read,
                                }
                            }
                        }

                        ChromelessButton {
                            class: Some(
                                "flex items-center gap-2 p-2 text-gray-600 hover:text-gray-900 hover:bg-gray-100 rounded-lg text-sm"
                                    .to_string(),
                            ),
                            onclick: move |_| on_navigate.call(NavSection::Profile),
                            UserIcon { class: "w-5 h-5" }
                            span { class: "hidden sm:inline", "{user_name}" }
                        }
                        ChromelessButton {
                            class: Some(
                                "p-2 text-gray-500 hover:text-red-600 hover:bg-gray-100 rounded-lg"
                                    .to_string(),
                            ),
                            aria_label: Some("Log out".to_string()),
                            onclick: move |_| on_logout.call(()),
                            LogOutIcon { class: "w-5 h-5" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(section: NavSection, is_active: bool, on_navigate: EventHandler<NavSection>) -> Element {
    let class = if is_active {
        "px-3 py-2 text-sm rounded-lg bg-indigo-50 text-indigo-600 font-medium"
    } else {
        "px-3 py-2 text-sm rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100"
    };

    rsx! {
        button {
            class,
            onclick: move |_| on_navigate.call(section),
            {section.label()}
        }
    }
}

#[component]
fn NotificationDropdown(
    notifications: ReadStore<NotificationsState>,
    on_mark_read: EventHandler<i64>,
    on_mark_all_read: EventHandler<()>,
) -> Element {
    let items = notifications.items().read().clone();

    rsx! {
        div { class: "absolute right-0 mt-2 w-80 bg-white border border-gray-200 rounded-lg shadow-xl overflow-hidden",
            div { class: "flex items-center justify-between px-4 py-2 border-b border-gray-100",
                span { class: "text-sm font-semibold text-gray-900", "Notifications" }
                if !items.is_empty() {
                    ChromelessButton {
                        class: Some("text-xs text-indigo-600 hover:text-indigo-800".to_string()),
                        onclick: move |_| on_mark_all_read.call(()),
                        "Mark all read"
                    }
                }
            }
            if items.is_empty() {
                p { class: "px-4 py-6 text-sm text-gray-400 text-center", "You're all caught up." }
            } else {
                div { class: "max-h-80 overflow-y-auto",
                    for item in items {
                        div {
                            key: "{item.id}",
                            class: "px-4 py-3 border-b border-gray-50 last:border-0 flex items-start justify-between gap-2",
                            div { class: "min-w-0",
                                p { class: "text-sm text-gray-800", "{item.message}" }
                                p { class: "text-xs text-gray-400 mt-0.5",
                                    {item.created_at.format("%b %e, %H:%M").to_string()}
                                }
                            }
                            ChromelessButton {
                                class: Some(
                                    "text-gray-300 hover:text-green-600 flex-shrink-0".to_string(),
                                ),
                                aria_label: Some("Mark read".to_string()),
                                onclick: {
                                    let id = item.id;
                                    move |_| on_mark_read.call(id)
                                },
                                CheckIcon { class: "w-4 h-4" }
                            }
                        }
                    }
                }
            }
        }
    }
}
