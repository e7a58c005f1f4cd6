use dioxus::prelude::*;

use ui::use_auth;

use crate::Route;

/// Catch-all 404 page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let auth = use_auth();
    let authenticated = auth().authenticated;
    let path = segments.join("/");

    rsx! {
        div {
            class: "error-page",
            role: "main",
            aria_label: "Not Found Page",
            h1 { "404 - Page Not Found" }
            p { "No page exists at /{path}." }
            if authenticated {
                Link { to: Route::Dashboard {}, "Back to Dashboard" }
            } else {
                Link { to: Route::Home {}, "Back to Home" }
            }
        }
    }
}
