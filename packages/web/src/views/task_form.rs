//! Shared create/edit task form.

use dioxus::prelude::*;

use api::{TaskDraft, TaskPriority, TaskStatus};
use ui::format::{date_input_value, parse_date_input};

/// Form for a task draft. The caller owns submission: `on_submit` fires
/// with a validated draft, and `error` / `loading` flow back in as props.
#[component]
pub fn TaskForm(
    #[props(default)] initial: Option<TaskDraft>,
    submit_label: String,
    #[props(default = false)] loading: bool,
    on_submit: EventHandler<TaskDraft>,
) -> Element {
    let seed = initial.clone();
    let mut title = use_signal(|| seed.as_ref().map(|d| d.title.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        seed.as_ref()
            .and_then(|d| d.description.clone())
            .unwrap_or_default()
    });
    let mut status = use_signal(|| {
        seed.as_ref()
            .map(|d| d.status)
            .unwrap_or(TaskStatus::Pending)
    });
    let mut priority = use_signal(|| {
        seed.as_ref()
            .map(|d| d.priority)
            .unwrap_or(TaskPriority::Medium)
    });
    let mut due_date = use_signal(|| {
        seed.as_ref()
            .map(|d| date_input_value(d.due_date.as_ref()))
            .unwrap_or_default()
    });
    let mut category = use_signal(|| {
        seed.as_ref()
            .and_then(|d| d.category.clone())
            .unwrap_or_default()
    });
    let mut field_error = use_signal(|| Option::<String>::None);

    // Known category tokens feed the input's datalist; a failure here
    // only costs the suggestions.
    let categories = use_resource(|| async {
        match api::client().list_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                tracing::debug!("category fetch: {err}");
                Vec::new()
            }
        }
    });
    let category_options = categories.read().clone().unwrap_or_default();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        field_error.set(None);

        let t = title().trim().to_string();
        if t.is_empty() {
            field_error.set(Some("Title is required.".to_string()));
            return;
        }
        if t.chars().count() > 100 {
            field_error.set(Some("Title must be at most 100 characters.".to_string()));
            return;
        }
        let d = description().trim().to_string();
        if d.chars().count() > 500 {
            field_error.set(Some(
                "Description must be at most 500 characters.".to_string(),
            ));
            return;
        }
        let c = category().trim().to_string();

        on_submit.call(TaskDraft {
            title: t,
            description: (!d.is_empty()).then_some(d),
            status: status(),
            priority: priority(),
            due_date: parse_date_input(&due_date()),
            category: (!c.is_empty()).then_some(c),
        });
    };

    let status_value = status().as_str();
    let priority_value = priority().as_str();

    rsx! {
        form {
            class: "taskform",
            onsubmit: handle_submit,
            aria_label: "Task Form",

            if let Some(err) = field_error() {
                div { class: "status-message error", "{err}" }
            }

            label { r#for: "task-title", "Title" }
            input {
                id: "task-title",
                name: "title",
                placeholder: "Task Title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            label { r#for: "task-description", "Description" }
            textarea {
                id: "task-description",
                name: "description",
                placeholder: "Task Description",
                rows: 3,
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            label { r#for: "task-due-date", "Due Date" }
            input {
                id: "task-due-date",
                name: "due-date",
                r#type: "date",
                value: due_date(),
                oninput: move |evt: FormEvent| due_date.set(evt.value()),
            }

            label { r#for: "task-status", "Status" }
            select {
                id: "task-status",
                name: "status",
                value: "{status_value}",
                onchange: move |evt: FormEvent| {
                    if let Some(parsed) = TaskStatus::parse(&evt.value()) {
                        status.set(parsed);
                    }
                },
                option { value: "PENDING", "Pending" }
                option { value: "IN_PROGRESS", "In Progress" }
                option { value: "COMPLETE", "Complete" }
            }

            label { r#for: "task-priority", "Priority" }
            select {
                id: "task-priority",
                name: "priority",
                value: "{priority_value}",
                onchange: move |evt: FormEvent| {
                    if let Some(parsed) = TaskPriority::parse(&evt.value()) {
                        priority.set(parsed);
                    }
                },
                option { value: "LOW", "Low" }
                option { value: "MEDIUM", "Medium" }
                option { value: "HIGH", "High" }
            }

            label { r#for: "task-category", "Category" }
            input {
                id: "task-category",
                name: "category",
                placeholder: "Category",
                list: "task-category-options",
                value: category(),
                oninput: move |evt: FormEvent| category.set(evt.value()),
            }
            datalist {
                id: "task-category-options",
                for option_value in category_options {
                    option { key: "{option_value}", value: "{option_value}" }
                }
            }

            button {
                r#type: "submit",
                disabled: loading,
                "{submit_label}"
            }
        }
    }
}
