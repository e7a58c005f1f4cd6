use dioxus::prelude::*;

use super::data;
use crate::Spinner;

/// Total / completed / uncompleted counts.
#[component]
pub fn TaskSummaryWidget() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });

    let tasks_read = tasks.read();
    match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading summary" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "widget-error", "{message}" }
            }
        }
        Some(Ok(list)) => {
            let summary = data::summarize(list);
            rsx! {
                div {
                    class: "widget task-summary-widget",
                    role: "region",
                    aria_label: "Task Summary Widget",
                    h3 { "Task Summary" }
                    ul {
                        li { "Total tasks: {summary.total}" }
                        li { "Completed: {summary.complete}" }
                        li { "Uncompleted: {summary.uncompleted}" }
                    }
                }
            }
        }
    }
}
