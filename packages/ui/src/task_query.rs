//! Search, filter, and sort for the task list page.
//!
//! Pure data transformation: the page owns the fetched tasks and re-runs
//! the query whenever a control changes.

use api::{Task, TaskPriority, TaskStatus};

/// Field the list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    DueDate,
    Priority,
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::DueDate,
        SortKey::Priority,
        SortKey::CreatedAt,
    ];

    /// Stable token for select option values.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::DueDate => "due-date",
            SortKey::Priority => "priority",
            SortKey::CreatedAt => "created-at",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::DueDate => "Due Date",
            SortKey::Priority => "Priority",
            SortKey::CreatedAt => "Created",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// The task list's control state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskQuery {
    /// Case-insensitive title substring.
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub sort_key: SortKey,
    pub ascending: bool,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self {
            ascending: true,
            ..Self::default()
        }
    }

    /// Filter then order a snapshot of the fetched tasks.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let needle = self.search.trim().to_lowercase();
        let mut matched: Vec<Task> = tasks
            .iter()
            .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
            .filter(|task| self.status.is_none_or(|status| task.status == status))
            .filter(|task| self.priority.is_none_or(|priority| task.priority == priority))
            .cloned()
            .collect();

        matched.sort_by(|a, b| match self.sort_key {
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            // Undated tasks sink to the end of an ascending sort.
            SortKey::DueDate => cmp_option(a.due_date, b.due_date),
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::CreatedAt => cmp_option(a.created_at, b.created_at),
        });
        if !self.ascending {
            matched.reverse();
        }
        matched
    }
}

fn cmp_option<T: Ord>(a: Option<T>, b: Option<T>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            status,
            priority,
            due_date: None,
            category: None,
            created_at: None,
            updated_at: None,
            completed_at: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "B Task", TaskStatus::Pending, TaskPriority::High),
            task(2, "A Task", TaskStatus::Complete, TaskPriority::Low),
            task(3, "C Task", TaskStatus::Pending, TaskPriority::Medium),
        ]
    }

    #[test]
    fn status_filter_keeps_only_matching_tasks() {
        let query = TaskQuery {
            status: Some(TaskStatus::Pending),
            ..TaskQuery::new()
        };
        let out = query.apply(&sample());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn priority_filter_composes_with_status() {
        let query = TaskQuery {
            status: Some(TaskStatus::Pending),
            priority: Some(TaskPriority::High),
            ..TaskQuery::new()
        };
        let out = query.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let query = TaskQuery {
            search: "a ta".into(),
            ..TaskQuery::new()
        };
        let out = query.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "A Task");
    }

    #[test]
    fn title_sort_ascends_and_toggles() {
        let mut query = TaskQuery::new();
        let out = query.apply(&sample());
        let titles: Vec<_> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A Task", "B Task", "C Task"]);

        query.ascending = false;
        let out = query.apply(&sample());
        let titles: Vec<_> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["C Task", "B Task", "A Task"]);
    }

    #[test]
    fn due_date_sort_puts_undated_last() {
        let mut tasks = sample();
        tasks[0].due_date = Some(Utc.with_ymd_and_hms(2025, 9, 2, 0, 0, 0).unwrap());
        tasks[2].due_date = Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap());
        let query = TaskQuery {
            sort_key: SortKey::DueDate,
            ..TaskQuery::new()
        };
        let out = query.apply(&tasks);
        let ids: Vec<_> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn priority_sort_uses_urgency_rank() {
        let query = TaskQuery {
            sort_key: SortKey::Priority,
            ..TaskQuery::new()
        };
        let out = query.apply(&sample());
        let ids: Vec<_> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn sort_key_tokens_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("bogus"), None);
    }
}
