use dioxus::prelude::*;

use api::TaskDraft;
use ui::StatusMessage;

use super::TaskForm;
use crate::Route;

/// Create-task page wrapping the shared form.
#[component]
pub fn TaskNew() -> Element {
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let handle_create = move |draft: TaskDraft| {
        spawn(async move {
            loading.set(true);
            error.set(None);
            success.set(None);
            match api::client().create_task(&draft).await {
                Ok(_) => {
                    success.set(Some("Task created!".to_string()));
                    nav.push(Route::TaskList {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "taskform-container",
            role: "main",
            aria_label: "New Task Page",
            h1 { "New Task" }
            p { "Welcome to your task form! Here you can create a new task." }
            StatusMessage { loading: loading(), error: error(), success: success() }
            TaskForm {
                submit_label: "Create Task",
                loading: loading(),
                on_submit: handle_create,
            }
        }
    }
}
