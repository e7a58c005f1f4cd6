use dioxus::prelude::*;

use ui::widgets::{
    CategoryBreakdownWidget, OverdueTasksWidget, ProductivityChartWidget, TaskSummaryWidget,
    UpcomingTasksWidget,
};

/// Overview page: each widget fetches and aggregates on its own.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "dashboard-container",
            role: "main",
            aria_label: "Dashboard",
            h1 { "Dashboard" }
            p { "Welcome to your dashboard! Here you can see an overview of your tasks and activity." }
            div {
                class: "dashboard-widgets",
                TaskSummaryWidget {}
                UpcomingTasksWidget {}
                OverdueTasksWidget {}
                ProductivityChartWidget {}
                CategoryBreakdownWidget {}
            }
        }
    }
}
