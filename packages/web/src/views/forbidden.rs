use dioxus::prelude::*;

use ui::use_auth;

use crate::Route;

/// 403 page, reached when the server refuses access to someone else's
/// resource. Offers a way back that matches the session state.
#[component]
pub fn Forbidden() -> Element {
    let auth = use_auth();
    let authenticated = auth().authenticated;

    rsx! {
        div {
            class: "error-page",
            role: "main",
            aria_label: "Forbidden Page",
            h1 { "403 - Forbidden" }
            p { "You don't have permission to view this resource." }
            if authenticated {
                Link { to: Route::Dashboard {}, "Back to Dashboard" }
            } else {
                Link { to: Route::Login {}, "Go to Login" }
            }
        }
    }
}
