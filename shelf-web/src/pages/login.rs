use crate::{api, session, Route};
use dioxus::prelude::*;
use shelf_ui::display_types::UserSession;
use shelf_ui::{LoginSubmission, LoginView, RegisterSubmission};

#[component]
pub fn Login() -> Element {
    let mut session_signal: Signal<Option<UserSession>> = use_context();
    let mut registering = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    use_effect(move || {
        if session_signal.read().is_some() {
            navigator().push(Route::Home {});
        }
    });

    rsx! {
        LoginView {
            registering: registering(),
            error: error(),
            notice: notice(),
            busy: busy(),
            on_login: move |creds: LoginSubmission| {
                busy.set(true);
                error.set(None);
                notice.set(None);
                spawn(async move {
                    let result = api::login(&creds.email, &creds.password).await;
                    busy.set(false);
                    match result {
                        Ok(user) => {
                            session::save(&user);
                            session_signal.set(Some(user));
                            navigator().push(Route::Home {});
                        }
                        Err(e) => error.set(Some(e)),
                    }
                });
            },
            on_register: move |form: RegisterSubmission| {
                busy.set(true);
                error.set(None);
                notice.set(None);
                spawn(async move {
                    let result = api::register(
                            &form.email,
                            &form.password,
                            &form.role,
                            form.admin_pin.as_deref(),
                        )
                        .await;
                    busy.set(false);
                    match result {
                        Ok(()) => {
                            registering.set(false);
                            notice.set(Some("Registration successful! Please sign in.".to_string()));
                        }
                        Err(e) => error.set(Some(e)),
                    }
                });
            },
            on_toggle_mode: move |_| {
                registering.set(!registering());
                error.set(None);
                notice.set(None);
            },
        }
    }
}
