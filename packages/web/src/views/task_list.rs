//! Task list page: one fetch, then local search / filter / sort.

use dioxus::prelude::*;

use api::{Task, TaskPriority, TaskStatus};
use ui::format::format_category;
use ui::task_query::{SortKey, TaskQuery};
use ui::Spinner;

use crate::Route;

struct TaskRow {
    id: i64,
    title: String,
    status: &'static str,
    priority: &'static str,
    due: String,
    category: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.status.label(),
            priority: task.priority.label(),
            due: task
                .due_date
                .map(|due| ui::format::format_date(&due))
                .unwrap_or_else(|| "-".to_string()),
            category: task
                .category
                .as_deref()
                .map(format_category)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[component]
pub fn TaskList() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });
    let mut query = use_signal(TaskQuery::new);

    let q = query();
    let status_value = q.status.map(TaskStatus::as_str).unwrap_or("");
    let priority_value = q.priority.map(TaskPriority::as_str).unwrap_or("");
    let sort_value = q.sort_key.as_str();
    let direction_label = if q.ascending { "Ascending" } else { "Descending" };

    let tasks_read = tasks.read();
    let body = match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading tasks" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "status-message error", "{message}" }
            }
        }
        Some(Ok(list)) => {
            if list.is_empty() {
                rsx! {
                    p { class: "tasklist-empty", "You have no tasks." }
                }
            } else {
                let rows: Vec<TaskRow> = q.apply(list).iter().map(TaskRow::from_task).collect();
                if rows.is_empty() {
                    rsx! {
                        p { class: "tasklist-empty", "No tasks match your filters." }
                    }
                } else {
                    rsx! {
                        table {
                            class: "tasklist-table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Status" }
                                    th { "Priority" }
                                    th { "Due" }
                                    th { "Category" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    tr {
                                        key: "{row.id}",
                                        td {
                                            Link { to: Route::TaskDetail { id: row.id }, "{row.title}" }
                                        }
                                        td { "{row.status}" }
                                        td { "{row.priority}" }
                                        td { "{row.due}" }
                                        td { "{row.category}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "tasklist-container",
            role: "main",
            aria_label: "Task List Page",
            h1 { "Task List" }
            p { "Welcome to your task list! Here you can see all your tasks and manage them effectively." }

            div {
                class: "tasklist-filters",
                input {
                    placeholder: "Search tasks",
                    aria_label: "Search Tasks",
                    value: "{q.search}",
                    oninput: move |evt: FormEvent| query.write().search = evt.value(),
                }
                select {
                    aria_label: "Status Filter",
                    value: "{status_value}",
                    onchange: move |evt: FormEvent| {
                        query.write().status = TaskStatus::parse(&evt.value());
                    },
                    option { value: "", "All Statuses" }
                    option { value: "PENDING", "Pending" }
                    option { value: "IN_PROGRESS", "In Progress" }
                    option { value: "COMPLETE", "Complete" }
                }
                select {
                    aria_label: "Priority Filter",
                    value: "{priority_value}",
                    onchange: move |evt: FormEvent| {
                        query.write().priority = TaskPriority::parse(&evt.value());
                    },
                    option { value: "", "All Priorities" }
                    option { value: "LOW", "Low" }
                    option { value: "MEDIUM", "Medium" }
                    option { value: "HIGH", "High" }
                }
                select {
                    aria_label: "Sort By",
                    value: "{sort_value}",
                    onchange: move |evt: FormEvent| {
                        if let Some(key) = SortKey::parse(&evt.value()) {
                            query.write().sort_key = key;
                        }
                    },
                    option { value: "title", "Title" }
                    option { value: "due-date", "Due Date" }
                    option { value: "priority", "Priority" }
                    option { value: "created-at", "Created" }
                }
                button {
                    aria_label: "Toggle Sort Direction",
                    onclick: move |_| {
                        let current = query.peek().ascending;
                        query.write().ascending = !current;
                    },
                    "{direction_label}"
                }
            }

            div {
                class: "tasklist-items",
                {body}
            }
        }
    }
}
