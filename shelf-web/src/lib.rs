pub mod api;
pub mod dom;
pub mod pages;
pub mod session;
pub mod time;
pub mod toast;

use dioxus::prelude::*;
use pages::{Admin, AppLayout, Browse, Chat, Home, Login, MyLibrary, Profile, RequestBook};
use shelf_ui::display_types::UserSession;
use toast::{ToastHost, Toaster};

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/browse")]
    Browse {},
    #[route("/my-library")]
    MyLibrary {},
    #[route("/chat")]
    Chat {},
    #[route("/request-book")]
    RequestBook {},
    #[route("/admin")]
    Admin {},
    #[route("/profile")]
    Profile {},
}

#[component]
pub fn App() -> Element {
    // Session restored from local storage so a reload keeps the user signed in
    let session: Signal<Option<UserSession>> = use_signal(session::load);
    use_context_provider(|| session);

    let toast_slot = use_signal(|| None);
    use_context_provider(|| Toaster::new(toast_slot));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-50",
            Router::<Route> {}
            ToastHost { slot: toast_slot }
        }
    }
}
