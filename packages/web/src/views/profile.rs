//! Profile page: account details, credential changes, verification.

use dioxus::prelude::*;

use api::User;
use ui::validation::{
    is_valid_email, is_valid_password, is_valid_username, EMAIL_REQUIREMENTS,
    PASSWORD_REQUIREMENTS, USERNAME_REQUIREMENTS,
};
use ui::{mark_logged_in, use_auth, StatusMessage};

/// Which edit form is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EditSection {
    Username,
    Email,
    Password,
}

#[component]
pub fn Profile() -> Element {
    let mut user = use_signal(|| Option::<User>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut open_section = use_signal(|| Option::<EditSection>::None);
    let mut saving = use_signal(|| false);
    let mut auth = use_auth();

    let mut new_username = use_signal(String::new);
    let mut new_email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut current_password = use_signal(String::new);

    let _loader = use_resource(move || async move {
        loading.set(true);
        match api::client().current_user().await {
            Ok(fetched) => user.set(Some(fetched)),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    let mut toggle_section = move |section: EditSection| {
        let next = if *open_section.peek() == Some(section) {
            None
        } else {
            Some(section)
        };
        open_section.set(next);
        error.set(None);
        success.set(None);
        new_username.set(String::new());
        new_email.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
        current_password.set(String::new());
    };

    let handle_username = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let Some(user_id) = user.peek().as_ref().map(|u| u.id) else {
            return;
        };
        let username = new_username().trim().to_string();
        let password = current_password();
        if !is_valid_username(&username) {
            error.set(Some(USERNAME_REQUIREMENTS.to_string()));
            return;
        }
        if password.is_empty() {
            error.set(Some("Current password is required.".to_string()));
            return;
        }
        spawn(async move {
            saving.set(true);
            match api::client()
                .update_username(user_id, &username, &password)
                .await
            {
                Ok(updated) => {
                    user.set(Some(updated));
                    success.set(Some("Username updated successfully!".to_string()));
                    open_section.set(None);
                    current_password.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let handle_email = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let Some(user_id) = user.peek().as_ref().map(|u| u.id) else {
            return;
        };
        let email = new_email().trim().to_string();
        let password = current_password();
        if !is_valid_email(&email) {
            error.set(Some(EMAIL_REQUIREMENTS.to_string()));
            return;
        }
        if password.is_empty() {
            error.set(Some("Current password is required.".to_string()));
            return;
        }
        spawn(async move {
            saving.set(true);
            match api::client().update_email(user_id, &email, &password).await {
                Ok(updated) => {
                    user.set(Some(updated));
                    success.set(Some("Email updated successfully!".to_string()));
                    open_section.set(None);
                    current_password.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let handle_password = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let Some(user_id) = user.peek().as_ref().map(|u| u.id) else {
            return;
        };
        let password = new_password();
        let confirm = confirm_password();
        let current = current_password();
        if current.is_empty() {
            error.set(Some("Current password is required.".to_string()));
            return;
        }
        if !is_valid_password(&password) {
            error.set(Some(PASSWORD_REQUIREMENTS.to_string()));
            return;
        }
        if password != confirm {
            error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        spawn(async move {
            saving.set(true);
            match api::client()
                .update_password(user_id, &password, &current)
                .await
            {
                Ok(()) => {
                    success.set(Some("Password updated successfully!".to_string()));
                    open_section.set(None);
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    current_password.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let handle_verify = move |_| {
        error.set(None);
        success.set(None);
        spawn(async move {
            saving.set(true);
            match api::client().verify_current_user().await {
                // Refetch so the displayed flags match the server.
                Ok(()) => match api::client().current_user().await {
                    Ok(fetched) => {
                        mark_logged_in(&mut auth, fetched.verified);
                        user.set(Some(fetched));
                        success.set(Some("Account verified!".to_string()));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                },
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let account = user().map(|u| {
        let verified_label = if u.verified { "Verified" } else { "Not verified" };
        (u.username, u.email, u.verified, verified_label)
    });
    let section = open_section();

    rsx! {
        div {
            class: "profile-container",
            role: "main",
            aria_label: "Profile Page",
            h1 { "Profile" }
            StatusMessage { loading: loading(), error: error(), success: success() }

            if let Some((username, email, verified, verified_label)) = account {
                div {
                    class: "profile-info",
                    p {
                        strong { "Username: " }
                        "{username}"
                    }
                    p {
                        strong { "Email: " }
                        "{email}"
                    }
                    p {
                        strong { "Status: " }
                        "{verified_label}"
                    }
                    if !verified {
                        button {
                            disabled: saving(),
                            onclick: handle_verify,
                            "Verify Account"
                        }
                    }
                }

                div {
                    class: "profile-actions",
                    button {
                        onclick: move |_| toggle_section(EditSection::Username),
                        "Change Username"
                    }
                    button {
                        onclick: move |_| toggle_section(EditSection::Email),
                        "Change Email"
                    }
                    button {
                        onclick: move |_| toggle_section(EditSection::Password),
                        "Change Password"
                    }
                }

                if section == Some(EditSection::Username) {
                    form {
                        class: "profile-form",
                        onsubmit: handle_username,
                        aria_label: "Change Username",
                        label { r#for: "profile-new-username", "New Username" }
                        input {
                            id: "profile-new-username",
                            placeholder: "New Username",
                            value: new_username(),
                            oninput: move |evt: FormEvent| new_username.set(evt.value()),
                        }
                        p { class: "field-hint", "{USERNAME_REQUIREMENTS}" }
                        label { r#for: "profile-username-current", "Current Password" }
                        input {
                            id: "profile-username-current",
                            r#type: "password",
                            placeholder: "Current Password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: saving(),
                            "Save Username"
                        }
                    }
                }

                if section == Some(EditSection::Email) {
                    form {
                        class: "profile-form",
                        onsubmit: handle_email,
                        aria_label: "Change Email",
                        label { r#for: "profile-new-email", "New Email" }
                        input {
                            id: "profile-new-email",
                            r#type: "email",
                            placeholder: "New Email",
                            value: new_email(),
                            oninput: move |evt: FormEvent| new_email.set(evt.value()),
                        }
                        label { r#for: "profile-email-current", "Current Password" }
                        input {
                            id: "profile-email-current",
                            r#type: "password",
                            placeholder: "Current Password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: saving(),
                            "Save Email"
                        }
                    }
                }

                if section == Some(EditSection::Password) {
                    form {
                        class: "profile-form",
                        onsubmit: handle_password,
                        aria_label: "Change Password",
                        label { r#for: "profile-password-current", "Current Password" }
                        input {
                            id: "profile-password-current",
                            r#type: "password",
                            placeholder: "Current Password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                        label { r#for: "profile-new-password", "New Password" }
                        input {
                            id: "profile-new-password",
                            r#type: "password",
                            placeholder: "New Password",
                            value: new_password(),
                            oninput: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                        p { class: "field-hint", "{PASSWORD_REQUIREMENTS}" }
                        label { r#for: "profile-confirm-password", "Confirm New Password" }
                        input {
                            id: "profile-confirm-password",
                            r#type: "password",
                            placeholder: "Confirm New Password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: saving(),
                            "Save Password"
                        }
                    }
                }
            }
        }
    }
}
