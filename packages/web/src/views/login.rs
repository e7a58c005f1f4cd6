//! Login page: form-encoded credentials, cookie session.

use dioxus::prelude::*;

use ui::{mark_logged_in, use_auth, StatusMessage};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                error.set(Some("Username and password are required.".to_string()));
                return;
            }

            loading.set(true);
            match api::client().login(&u, &p).await {
                Ok(()) => {
                    // The cookie is set; re-probe for the verified flag.
                    let verified = api::client()
                        .current_user()
                        .await
                        .map(|user| user.verified)
                        .unwrap_or(false);
                    mark_logged_in(&mut auth, verified);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-center",
            h1 { "Login" }
            StatusMessage { loading: loading(), error: error() }
            form {
                onsubmit: handle_submit,
                aria_label: "Login Form",

                input {
                    name: "username",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }
            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
