use dioxus::prelude::*;

use api::TaskDraft;
use ui::StatusMessage;

use super::TaskForm;
use crate::Route;

/// Edit-task page: pre-loads the task, then wraps the shared form.
#[component]
pub fn TaskEdit(id: i64) -> Element {
    // Track the route param in a signal so the loader re-runs if the id
    // changes while the component stays mounted.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut draft = use_signal(|| Option::<TaskDraft>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let task_id = id_signal();
        async move {
            match api::client().get_task(task_id).await {
                Ok(task) => draft.set(Some(TaskDraft::from_task(&task))),
                Err(err) if err.is_forbidden() => {
                    nav.replace(Route::Forbidden {});
                }
                Err(err) if err.is_not_found() => {
                    nav.replace(Route::NotFound {
                        segments: vec!["404".to_string()],
                    });
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
        }
    });

    let handle_update = move |updated: TaskDraft| {
        let task_id = *id_signal.peek();
        spawn(async move {
            loading.set(true);
            error.set(None);
            success.set(None);
            match api::client().update_task(task_id, &updated).await {
                Ok(_) => {
                    success.set(Some("Task updated!".to_string()));
                    nav.push(Route::TaskDetail { id: task_id });
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
            aria_label: "Edit Task Page",
            h1 { "Edit Task" }
            StatusMessage { loading: loading(), error: error(), success: success() }
            if let Some(err) = load_error() {
                div { class: "status-message error", "{err}" }
            } else if let Some(initial) = draft() {
                TaskForm {
                    initial,
                    submit_label: "Save Changes",
                    loading: loading(),
                    on_submit: handle_update,
                }
            } else {
                StatusMessage { loading: true }
            }
        }
    }
}
