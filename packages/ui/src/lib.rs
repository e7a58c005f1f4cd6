//! Shared UI for the Taskwell workspace: the authentication context, the
//! navigation shell, status components, the dashboard widgets, and the
//! pure helpers (validation, formatting, list queries) the page views
//! lean on.

mod auth;
pub use auth::{mark_logged_in, mark_logged_out, use_auth, AuthProvider, AuthState, RequireAuth};

mod navbar;
pub use navbar::Navbar;

mod status;
pub use status::{Spinner, StatusMessage};

pub mod format;
pub mod task_query;
pub mod validation;

pub mod widgets;
