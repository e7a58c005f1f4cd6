//! Task detail page: full record, completion toggle, edit and delete.

use dioxus::prelude::*;

use api::{Task, TaskStatus};
use ui::format::{format_category, format_date, format_timestamp};
use ui::StatusMessage;

use crate::Route;

struct DetailView {
    id: i64,
    title: String,
    description: String,
    status: &'static str,
    priority: &'static str,
    due: String,
    category: String,
    created: String,
    updated: String,
    toggle_label: &'static str,
}

impl DetailView {
    fn from_task(task: Task) -> Self {
        Self {
            id: task.id,
            description: task.description.clone().unwrap_or_default(),
            status: task.status.label(),
            priority: task.priority.label(),
            due: task
                .due_date
                .map(|due| format_date(&due))
                .unwrap_or_else(|| "-".to_string()),
            category: task
                .category
                .as_deref()
                .map(format_category)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "-".to_string()),
            created: task
                .created_at
                .map(|ts| format_timestamp(&ts))
                .unwrap_or_else(|| "-".to_string()),
            updated: task
                .updated_at
                .map(|ts| format_timestamp(&ts))
                .unwrap_or_else(|| "-".to_string()),
            toggle_label: if task.status == TaskStatus::Complete {
                "Mark as Incomplete"
            } else {
                "Mark as Complete"
            },
            title: task.title,
        }
    }
}

#[component]
pub fn TaskDetail(id: i64) -> Element {
    // Track the route param in a signal so the loader re-runs when the
    // router swaps ids without unmounting this view.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut task = use_signal(|| Option::<Task>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut toggling = use_signal(|| false);
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let task_id = id_signal();
        async move {
            loading.set(true);
            error.set(None);
            match api::client().get_task(task_id).await {
                Ok(fetched) => task.set(Some(fetched)),
                Err(err) if err.is_forbidden() => {
                    nav.replace(Route::Forbidden {});
                }
                Err(err) if err.is_not_found() => {
                    nav.replace(Route::NotFound {
                        segments: vec!["404".to_string()],
                    });
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        }
    });

    let handle_toggle = move |_| {
        let Some(current) = task.peek().clone() else {
            return;
        };
        spawn(async move {
            toggling.set(true);
            error.set(None);
            let result = if current.status == TaskStatus::Complete {
                api::client().uncomplete_task(current.id).await
            } else {
                api::client().complete_task(current.id).await
            };
            match result {
                // Refetch so timestamps reflect what the server stored.
                Ok(_) => match api::client().get_task(current.id).await {
                    Ok(fetched) => task.set(Some(fetched)),
                    Err(err) => error.set(Some(err.to_string())),
                },
                Err(_) => error.set(Some("Failed to update task status".to_string())),
            }
            toggling.set(false);
        });
    };

    let handle_delete = move |_| {
        let Some(current) = task.peek().clone() else {
            return;
        };
        if !confirm_delete() {
            return;
        }
        spawn(async move {
            match api::client().delete_task(current.id).await {
                Ok(()) => {
                    nav.push(Route::TaskList {});
                }
                Err(_) => error.set(Some("Failed to delete task".to_string())),
            }
        });
    };

    let detail = task().map(DetailView::from_task);

    rsx! {
        div {
            class: "taskdetail-container",
            role: "main",
            aria_label: "Task Details",
            h1 { "Task Details" }
            StatusMessage { loading: loading(), error: error() }
            if let Some(view) = detail {
                div {
                    class: "taskdetail-info",
                    h2 { "{view.title}" }
                    p {
                        strong { "Description: " }
                        "{view.description}"
                    }
                    p {
                        strong { "Status: " }
                        "{view.status}"
                    }
                    p {
                        strong { "Priority: " }
                        "{view.priority}"
                    }
                    p {
                        strong { "Due Date: " }
                        "{view.due}"
                    }
                    p {
                        strong { "Category: " }
                        "{view.category}"
                    }
                    p {
                        strong { "Created At: " }
                        "{view.created}"
                    }
                    p {
                        strong { "Updated At: " }
                        "{view.updated}"
                    }
                    div {
                        class: "taskdetail-actions",
                        button {
                            disabled: toggling(),
                            onclick: handle_toggle,
                            "{view.toggle_label}"
                        }
                        button {
                            onclick: move |_| {
                                nav.push(Route::TaskEdit { id: view.id });
                            },
                            "Edit Task"
                        }
                        button {
                            onclick: handle_delete,
                            "Delete Task"
                        }
                    }
                    Link {
                        to: Route::TaskList {},
                        aria_label: "Back to Task List",
                        "Back to Task List"
                    }
                }
            }
        }
    }
}

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this task?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
