use dioxus::prelude::*;

use crate::Route;

/// 401 page, reached when a protected route is hit without a session.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div {
            class: "error-page",
            role: "main",
            aria_label: "Unauthorized Page",
            h1 { "401 - Unauthorized" }
            p { "You need to log in to view this page." }
            Link { to: Route::Login {}, "Go to Login" }
        }
    }
}
