use dioxus::prelude::*;

use ui::{mark_logged_out, use_auth};

use crate::Route;

/// Clears the auth context and bounces to the login page.
#[component]
pub fn Logout() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        mark_logged_out(&mut auth);
        nav.replace(Route::Login {});
    });

    rsx! {
        div {
            class: "page-center",
            h1 { "Logging out..." }
        }
    }
}
