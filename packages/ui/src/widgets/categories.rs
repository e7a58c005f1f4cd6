use dioxus::prelude::*;

use super::data;
use crate::Spinner;

struct CategoryRow {
    name: String,
    count: usize,
    width_pct: f64,
}

/// Task counts per category as labelled proportional bars.
#[component]
pub fn CategoryBreakdownWidget() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });

    let tasks_read = tasks.read();
    match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading category breakdown" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "widget-error", aria_live: "assertive", "{message}" }
            }
        }
        Some(Ok(list)) => {
            let breakdown = data::category_breakdown(list);
            let max = breakdown.first().map(|(_, count)| *count).unwrap_or(1) as f64;
            let rows: Vec<CategoryRow> = breakdown
                .into_iter()
                .map(|(name, count)| CategoryRow {
                    name,
                    count,
                    width_pct: count as f64 / max * 100.0,
                })
                .collect();
            rsx! {
                div {
                    class: "widget category-breakdown-widget",
                    role: "region",
                    aria_label: "Tasks by Category Widget",
                    h3 { "Tasks by Category" }
                    if rows.is_empty() {
                        p { class: "widget-empty", "No tasks to display" }
                    } else {
                        ul {
                            class: "category-bars",
                            for row in rows {
                                li {
                                    key: "{row.name}",
                                    span { class: "category-name", "{row.name}" }
                                    span {
                                        class: "category-bar",
                                        style: "width: {row.width_pct}%",
                                    }
                                    span { class: "category-count", "{row.count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
