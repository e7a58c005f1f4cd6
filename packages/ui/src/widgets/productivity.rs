use chrono::Utc;
use dioxus::prelude::*;

use super::data;
use crate::Spinner;

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 180.0;
const BAR_AREA_HEIGHT: f64 = 130.0;
const BAR_BASELINE: f64 = 150.0;
const BAR_WIDTH: f64 = 14.0;

struct BarPair {
    label: String,
    created_x: f64,
    completed_x: f64,
    created_y: f64,
    completed_y: f64,
    created_height: f64,
    completed_height: f64,
    label_x: f64,
    label_y: f64,
}

/// Tasks created and completed per day over the last seven days, as a
/// small inline SVG bar chart.
#[component]
pub fn ProductivityChartWidget() -> Element {
    let tasks = use_resource(|| async { api::client().list_tasks().await });

    let tasks_read = tasks.read();
    match &*tasks_read {
        None => rsx! {
            Spinner { label: "Loading productivity chart" }
        },
        Some(Err(err)) => {
            let message = err.to_string();
            rsx! {
                div { class: "widget-error", "{message}" }
            }
        }
        Some(Ok(list)) => {
            let series = data::productivity_series(list, Utc::now().date_naive());
            let max_count = series
                .iter()
                .map(|day| day.created.max(day.completed))
                .max()
                .unwrap_or(0)
                .max(1) as f64;
            let slot = CHART_WIDTH / series.len() as f64;
            let bars: Vec<BarPair> = series
                .iter()
                .enumerate()
                .map(|(i, day)| {
                    let created_height = day.created as f64 / max_count * BAR_AREA_HEIGHT;
                    let completed_height = day.completed as f64 / max_count * BAR_AREA_HEIGHT;
                    let created_x = i as f64 * slot + (slot - 2.0 * BAR_WIDTH) / 2.0;
                    BarPair {
                        label: day.date.format("%m-%d").to_string(),
                        created_x,
                        completed_x: created_x + BAR_WIDTH + 1.0,
                        created_y: BAR_BASELINE - created_height,
                        completed_y: BAR_BASELINE - completed_height,
                        created_height,
                        completed_height,
                        label_x: created_x + BAR_WIDTH,
                        label_y: CHART_HEIGHT - 8.0,
                    }
                })
                .collect();

            rsx! {
                div {
                    class: "widget productivity-chart-widget",
                    role: "region",
                    aria_label: "Productivity Chart Widget",
                    h3 { "Productivity (Last 7 Days)" }
                    svg {
                        view_box: "0 0 320 180",
                        width: "100%",
                        role: "img",
                        for bar in bars {
                            rect {
                                x: "{bar.created_x}",
                                y: "{bar.created_y}",
                                width: "14",
                                height: "{bar.created_height}",
                                fill: "#82ca9d",
                            }
                            rect {
                                x: "{bar.completed_x}",
                                y: "{bar.completed_y}",
                                width: "14",
                                height: "{bar.completed_height}",
                                fill: "#8884d8",
                            }
                            text {
                                x: "{bar.label_x}",
                                y: "{bar.label_y}",
                                font_size: "9",
                                text_anchor: "middle",
                                "{bar.label}"
                            }
                        }
                    }
                    div {
                        class: "chart-legend",
                        span { class: "legend-swatch created" }
                        span { "Created" }
                        span { class: "legend-swatch completed" }
                        span { "Completed" }
                    }
                }
            }
        }
    }
}
