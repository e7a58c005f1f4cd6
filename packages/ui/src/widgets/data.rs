//! Pure aggregations behind the dashboard widgets.
//!
//! Each widget fetches its own snapshot of `/api/tasks` and feeds it
//! through one of these functions; the rendering layer stays trivial.

use crate::format::format_category;
use api::{Task, TaskStatus};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Counts for the task summary widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub complete: usize,
    pub uncompleted: usize,
}

pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let total = tasks.len();
    let complete = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Complete)
        .count();
    TaskSummary {
        total,
        complete,
        uncompleted: total - complete,
    }
}

/// Incomplete tasks due at or after `now`, soonest first, at most five.
pub fn upcoming_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Complete)
        .filter(|t| t.due_date.is_some_and(|due| due >= now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|t| t.due_date);
    upcoming.truncate(5);
    upcoming
}

/// Incomplete tasks already past due, longest-overdue first.
pub fn overdue_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    let mut overdue: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Complete)
        .filter(|t| t.due_date.is_some_and(|due| due < now))
        .cloned()
        .collect();
    overdue.sort_by_key(|t| t.due_date);
    overdue
}

/// One bar pair in the productivity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub created: usize,
    pub completed: usize,
}

/// Created/completed counts per day over the last seven calendar days,
/// oldest first, today included. Always exactly seven entries.
pub fn productivity_series(tasks: &[Task], today: NaiveDate) -> Vec<DayActivity> {
    let mut series: Vec<DayActivity> = (0..7)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DayActivity {
            date,
            created: 0,
            completed: 0,
        })
        .collect();

    for task in tasks {
        if let Some(created) = task.created_at {
            if let Some(day) = series
                .iter_mut()
                .find(|d| d.date == created.date_naive())
            {
                day.created += 1;
            }
        }
        if task.status == TaskStatus::Complete {
            if let Some(completed) = task.completed_at {
                if let Some(day) = series
                    .iter_mut()
                    .find(|d| d.date == completed.date_naive())
                {
                    day.completed += 1;
                }
            }
        }
    }
    series
}

/// Task counts per display category, most common first (ties
/// alphabetical). Tasks without a category land in "Uncategorized".
pub fn category_breakdown(tasks: &[Task]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for task in tasks {
        let name = task
            .category
            .as_deref()
            .map(format_category)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string());
        match counts.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
