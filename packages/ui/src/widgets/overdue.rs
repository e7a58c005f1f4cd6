use chrono::Utc;
use dioxus::prelude::*;

use super::data;
use crate::format::format_date;
use crate::Spinner;

struct DueRow {
    id: i64,
    title: String,
    due: Option<String>,
}

/// Incomplete tasks already past their due date, longest-overdue first.
#[component]
pub fn OverdueTasksWidget() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });

    let tasks_read = tasks.read();
    match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading overdue tasks" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "widget-error", aria_live: "assertive", "{message}" }
            }
        }
        Some(Ok(list)) => {
            let overdue: Vec<DueRow> = data::overdue_tasks(list, Utc::now())
                .into_iter()
                .map(|task| DueRow {
                    id: task.id,
                    title: task.title,
                    due: task.due_date.map(|due| format_date(&due)),
                })
                .collect();
            rsx! {
                div {
                    class: "widget overdue-tasks-widget",
                    role: "region",
                    aria_label: "Overdue Tasks Widget",
                    h3 { "Overdue Tasks" }
                    if overdue.is_empty() {
                        p { "No overdue tasks!" }
                    } else {
                        ul {
                            for row in overdue {
                                li {
                                    key: "{row.id}",
                                    strong { "{row.title}" }
                                    if let Some(due) = row.due {
                                        " - Overdue since {due}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
