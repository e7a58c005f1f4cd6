//! # API crate — Taskwell's remote operations
//!
//! Everything the client knows about the backend lives here: the wire
//! records ([`models`]), the error type ([`error`]), and one method per
//! remote endpoint on [`TaskwellClient`] ([`users`], [`tasks`]).
//!
//! Views and widgets grab the process-wide instance via [`client()`] and
//! call operations directly:
//!
//! ```no_run
//! # async fn demo() -> api::Result<()> {
//! let tasks = api::client().list_tasks().await?;
//! # Ok(()) }
//! ```

pub mod client;
pub mod error;
pub mod models;

mod tasks;
mod users;

pub use client::{client, ClientConfig, TaskwellClient};
pub use error::{ApiError, Result};
pub use models::{NewUser, Task, TaskDraft, TaskPriority, TaskStatus, User};
