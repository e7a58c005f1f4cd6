//! Task endpoints.

use crate::client::TaskwellClient;
use crate::error::Result;
use crate::models::{Task, TaskDraft};
use reqwest::Method;

impl TaskwellClient {
    /// Fetch every task owned by the current user.
    ///
    /// GET /api/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/api/tasks")?;
        self.send_json(builder, "Failed to fetch tasks").await
    }

    /// Create a task from a draft.
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/tasks")?.json(draft);
        self.send_json(builder, "Task creation failed").await
    }

    /// Fetch one task.
    ///
    /// GET /api/tasks/{id}
    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let builder = self.request(Method::GET, &format!("/api/tasks/{id}"))?;
        self.send_json(builder, "Failed to fetch task").await
    }

    /// Replace a task's editable fields.
    ///
    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let builder = self
            .request(Method::PUT, &format!("/api/tasks/{id}"))?
            .json(draft);
        self.send_json(builder, "Task update failed").await
    }

    /// Delete a task.
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/tasks/{id}"))?;
        self.send_unit(builder, "Failed to delete task").await
    }

    /// Mark a task complete.
    ///
    /// POST /api/tasks/{id}/complete
    pub async fn complete_task(&self, id: i64) -> Result<Task> {
        let builder = self.request(Method::POST, &format!("/api/tasks/{id}/complete"))?;
        self.send_json(builder, "Failed to complete task").await
    }

    /// Move a completed task back to pending.
    ///
    /// POST /api/tasks/{id}/uncomplete
    pub async fn uncomplete_task(&self, id: i64) -> Result<Task> {
        let builder = self.request(Method::POST, &format!("/api/tasks/{id}/uncomplete"))?;
        self.send_json(builder, "Failed to uncomplete task").await
    }

    /// Category tokens known to the backend, for the task form's datalist.
    ///
    /// GET /api/tasks/categories
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let builder = self.request(Method::GET, "/api/tasks/categories")?;
        self.send_json(builder, "Failed to fetch categories").await
    }
}
