//! Wire records exchanged with the Taskwell backend.
//!
//! These are plain value objects: the server owns their lifecycle and the
//! client only holds transient copies for the duration of a page view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, as returned by `/api/users/me` and the user
/// mutation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
}

/// Payload for `POST /api/users`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Complete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Complete,
    ];

    /// Wire token, e.g. `IN_PROGRESS`.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Complete => "COMPLETE",
        }
    }

    /// Human label for select options and detail rows.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
        }
    }

    /// Parse a wire token back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(TaskStatus::Pending),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETE" => Some(TaskStatus::Complete),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] =
        [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOW" => Some(TaskPriority::Low),
            "MEDIUM" => Some(TaskPriority::Medium),
            "HIGH" => Some(TaskPriority::High),
            _ => None,
        }
    }

    /// Ordering rank, lowest urgency first. Used for list sorting.
    pub fn rank(self) -> u8 {
        match self {
            TaskPriority::Low => 0,
            TaskPriority::Medium => 1,
            TaskPriority::High => 2,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-owned unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, with = "wire_time")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "wire_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "wire_time")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "wire_time")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for task create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, with = "wire_time")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TaskDraft {
    /// Pre-fill a draft from an existing task, for the edit form.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            category: task.category.clone(),
        }
    }
}

/// Timestamp (de)serialization tolerant of the backend's offset-free form.
///
/// Outgoing values are RFC 3339 with a `Z` suffix. Incoming values may carry
/// an offset (`2025-08-25T10:15:30Z`) or not (`2025-08-25T10:15:30`, Java
/// `LocalDateTime`); offset-free values are taken as UTC.
pub(crate) mod wire_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_wire_tokens_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("CANCELLED"), None);
    }

    #[test]
    fn priority_rank_orders_urgency() {
        assert!(TaskPriority::Low.rank() < TaskPriority::Medium.rank());
        assert!(TaskPriority::Medium.rank() < TaskPriority::High.rank());
    }

    #[test]
    fn task_decodes_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "Book flights",
            "description": "Window seat if possible",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "dueDate": "2025-09-01T12:00:00",
            "category": "WORK_TRAVEL",
            "createdAt": "2025-08-20T08:30:00",
            "updatedAt": "2025-08-21T09:00:00",
            "completedAt": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(
            task.due_date,
            Some(Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn task_tolerates_sparse_payload() {
        let json = r#"{"id": 1, "title": "Bare", "status": "PENDING", "priority": "LOW"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.category, None);
    }

    #[test]
    fn wire_time_accepts_offsets_and_naive() {
        let with_offset = wire_time::parse("2025-08-25T10:15:30Z").unwrap();
        let naive = wire_time::parse("2025-08-25T10:15:30").unwrap();
        assert_eq!(with_offset, naive);
        assert!(wire_time::parse("yesterday").is_none());
    }

    #[test]
    fn draft_serializes_due_date_as_rfc3339() {
        let draft = TaskDraft {
            title: "T".into(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()),
            category: Some("HOME".into()),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["dueDate"], "2025-09-01T00:00:00+00:00");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["priority"], "MEDIUM");
    }
}
