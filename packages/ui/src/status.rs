use dioxus::prelude::*;

/// Inline loading / error / success line used by every form and fetch.
#[component]
pub fn StatusMessage(
    #[props(default = false)] loading: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] success: Option<String>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "status-message", "Loading..." }
        };
    }
    if let Some(error) = error.filter(|e| !e.is_empty()) {
        return rsx! {
            div {
                class: "status-message error",
                aria_live: "assertive",
                "{error}"
            }
        };
    }
    if let Some(success) = success.filter(|s| !s.is_empty()) {
        return rsx! {
            div { class: "status-message success", "{success}" }
        };
    }
    rsx! {}
}

/// Accessible spinner shown while a fetch is in flight.
#[component]
pub fn Spinner(#[props(default = "Loading".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            aria_label: "{label}",
            div { class: "spinner-circle" }
        }
    }
}
