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

/// The next five incomplete tasks with future due dates.
#[component]
pub fn UpcomingTasksWidget() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });

    let tasks_read = tasks.read();
    match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading upcoming tasks" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "widget-error", "{message}" }
            }
        }
        Some(Ok(list)) => {
            let upcoming: Vec<DueRow> = data::upcoming_tasks(list, Utc::now())
                .into_iter()
                .map(|task| DueRow {
                    id: task.id,
                    title: task.title,
                    due: task.due_date.map(|due| format_date(&due)),
                })
                .collect();
            rsx! {
                div {
                    class: "widget upcoming-tasks-widget",
                    role: "region",
                    aria_label: "Upcoming Tasks Widget",
                    h3 { "Upcoming Tasks" }
                    if upcoming.is_empty() {
                        p { "No upcoming tasks!" }
                    } else {
                        ul {
                            for row in upcoming {
                                li {
                                    key: "{row.id}",
                                    strong { "{row.title}" }
                                    if let Some(due) = row.due {
                                        " - Due {due}"
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
