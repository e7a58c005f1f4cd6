use dioxus::prelude::*;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "home-hero",
            role: "main",
            aria_label: "Home Page",
            h1 { "Welcome to Taskwell!" }
            p { "Plan your day, track your tasks, and see how you're doing." }
            div {
                class: "home-actions",
                button {
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "Go to Dashboard"
                }
                button {
                    onclick: move |_| { nav.push(Route::Register {}); },
                    "Register"
                }
                button {
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Login"
                }
            }
        }
    }
}
