use dioxus::prelude::*;

/// Navigation shell: brand on the left, the caller's links on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            h1 { class: "navbar-brand", "Taskwell" }
            ul {
                class: "navbar-links",
                {children}
            }
        }
    }
}
