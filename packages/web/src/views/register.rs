//! Registration page with local validation in front of the API call.

use dioxus::prelude::*;

use api::NewUser;
use ui::validation::{
    is_valid_email, is_valid_password, is_valid_username, EMAIL_REQUIREMENTS,
    PASSWORD_REQUIREMENTS, USERNAME_REQUIREMENTS,
};
use ui::StatusMessage;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            // Validation short-circuits before anything leaves the browser.
            if u.is_empty() || e.is_empty() || p.trim().is_empty() || cp.trim().is_empty() {
                error.set(Some("All fields are required.".to_string()));
                return;
            }
            if !is_valid_username(&u) {
                error.set(Some(USERNAME_REQUIREMENTS.to_string()));
                return;
            }
            if !is_valid_email(&e) {
                error.set(Some(EMAIL_REQUIREMENTS.to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if !is_valid_password(&p) {
                error.set(Some(PASSWORD_REQUIREMENTS.to_string()));
                return;
            }

            loading.set(true);
            let new_user = NewUser {
                username: u,
                email: e,
                password: p,
            };
            match api::client().register(&new_user).await {
                Ok(_) => {
                    loading.set(false);
                    success.set(Some("Registration successful! Please log in.".to_string()));
                    // Let the confirmation render before leaving the page.
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::TimeoutFuture::new(1_000).await;
                    nav.push(Route::Login {});
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
            h1 { "Registration" }
            StatusMessage { loading: loading(), error: error(), success: success() }
            form {
                onsubmit: handle_submit,
                aria_label: "Registration Form",

                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                span { class: "field-hint", "{USERNAME_REQUIREMENTS}" }

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                span { class: "field-hint", "Enter your email address" }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                span { class: "field-hint", "{PASSWORD_REQUIREMENTS}" }

                label { r#for: "confirm-password", "Confirm Password" }
                input {
                    id: "confirm-password",
                    name: "confirm-password",
                    r#type: "password",
                    placeholder: "Confirm Password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                span { class: "field-hint", "Confirm your password" }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    "Register"
                }
            }
            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
