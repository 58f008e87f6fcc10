//! Login / registration view - pure view with callbacks

use crate::components::helpers::ErrorDisplay;
use crate::components::icons::BookOpenIcon;
use crate::components::select::{Select, SelectOption};
use crate::components::text_input::TextInput;
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

/// Credentials submitted from the login form.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
}

/// Fields submitted from the registration form. `admin_pin` is only set
/// when the admin role is requested.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterSubmission {
    pub email: String,
    pub password: String,
    pub role: String,
    pub admin_pin: Option<String>,
}

/// Combined sign-in / sign-up card. The mode is owned by the caller so a
/// successful registration can switch back to sign-in with a notice.
#[component]
pub fn LoginView(
    registering: bool,
    /// Error from the last auth attempt, if any
    #[props(default)]
    error: Option<String>,
    /// Success notice, shown after registration completes
    #[props(default)]
    notice: Option<String>,
    #[props(default)] busy: bool,
    on_login: EventHandler<LoginSubmission>,
    on_register: EventHandler<RegisterSubmission>,
    on_toggle_mode: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "user".to_string());
    let mut admin_pin = use_signal(String::new);

    let wants_admin = registering && role.read().as_str() == "admin";
    let can_submit = !email.read().trim().is_empty()
        && !password.read().is_empty()
        && (!wants_admin || !admin_pin.read().trim().is_empty());

    let submit = move |_| {
        if registering {
            let admin = role.read().as_str() == "admin";
            on_register.call(RegisterSubmission {
                email: email.read().trim().to_string(),
                password: password.read().clone(),
                role: role.read().clone(),
                admin_pin: admin.then(|| admin_pin.read().trim().to_string()),
            });
        } else {
            on_login.call(LoginSubmission {
                email: email.read().trim().to_string(),
                password: password.read().clone(),
            });
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50 flex items-center justify-center p-4",
            div { class: "bg-white rounded-xl shadow-lg max-w-md w-full p-8",
                div { class: "text-center mb-6",
                    div { class: "flex justify-center text-indigo-600 mb-3",
                        BookOpenIcon { class: "w-10 h-10" }
                    }
                    h1 { class: "text-2xl font-bold text-gray-900",
                        if registering {
                            "Create your account"
                        } else {
                            "Welcome back"
                        }
                    }
                }

                if let Some(err) = &error {
                    ErrorDisplay { message: err.clone() }
                }
                if let Some(msg) = &notice {
                    div { class: "bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg mb-4 text-sm",
                        "{msg}"
                    }
                }

                div { class: "space-y-4",
                    TextInput {
                        label: Some("Email".to_string()),
                        r#type: "email",
                        value: email.read().clone(),
                        oninput: move |v| email.set(v),
                    }
                    TextInput {
                        label: Some("Password".to_string()),
                        r#type: "password",
                        value: password.read().clone(),
                        oninput: move |v| password.set(v),
                    }
                    if registering {
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Account type"
                            }
                            Select {
                                value: role.read().clone(),
                                onchange: move |v| role.set(v),
                                SelectOption { value: "user".to_string(), label: "Reader".to_string() }
                                SelectOption {
                                    value: "admin".to_string(),
                                    label: "Administrator".to_string(),
                                }
                            }
                        }
                    }
                    if wants_admin {
                        TextInput {
                            label: Some("Admin PIN".to_string()),
                            r#type: "password",
                            value: admin_pin.read().clone(),
                            oninput: move |v| admin_pin.set(v),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        class: Some("w-full justify-center".to_string()),
                        disabled: !can_submit,
                        loading: busy,
                        onclick: submit,
                        if registering {
                            "Sign Up"
                        } else {
                            "Sign In"
                        }
                    }
                }

                div { class: "text-center mt-4",
                    ChromelessButton {
                        class: Some("text-sm text-indigo-600 hover:text-indigo-800".to_string()),
                        onclick: move |_| on_toggle_mode.call(()),
                        if registering {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }
                }
            }
        }
    }
}
