use dioxus::prelude::*;

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::session::Session;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthScreen() -> Element {
    let session = use_context::<Session>();
    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let email_val = email().trim().to_string();
        let password_val = password().clone();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if !email_val.contains('@') {
            error.set(Some("Please enter a valid email address".to_string()));
            return;
        }
        if password_val.len() < MIN_PASSWORD_LENGTH {
            error.set(Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
            return;
        }

        loading.set(true);
        error.set(None);

        let current_mode = mode();
        spawn(async move {
            let result = match current_mode {
                AuthMode::SignIn => session.sign_in(email_val, password_val).await,
                AuthMode::SignUp => session.sign_up(email_val, password_val).await,
            };

            loading.set(false);

            if let Err(e) = result {
                error.set(Some(e));
            }
        });
    };

    let title = match mode() {
        AuthMode::SignIn => "SIGN IN",
        AuthMode::SignUp => "SIGN UP",
    };

    let switch_text = match mode() {
        AuthMode::SignIn => "NEW HERE? CREATE AN ACCOUNT",
        AuthMode::SignUp => "ALREADY REGISTERED? SIGN IN",
    };

    rsx! {
        div { class: "auth-container",
            div { class: "auth-block",
                h1 { "{title}" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    onsubmit: handle_submit,

                    div { class: "form-group",
                        label { "EMAIL" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            disabled: loading(),
                        }
                    }

                    div { class: "form-group",
                        label { "PASSWORD" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            disabled: loading(),
                        }
                    }

                    button {
                        class: "primary w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "LOADING..." } else { "{title}" }
                    }
                }

                div { class: "auth-switch",
                    button {
                        class: "btn-text",
                        onclick: move |_| {
                            mode.set(match mode() {
                                AuthMode::SignIn => AuthMode::SignUp,
                                AuthMode::SignUp => AuthMode::SignIn,
                            });
                            error.set(None);
                        },
                        "{switch_text}"
                    }
                }
            }
        }
    }
}
