//! Dashboard widgets.
//!
//! Every widget owns its fetch: one `use_resource` per widget, a spinner
//! while in flight, an inline error afterwards. There is no shared store;
//! the aggregation logic lives in [`data`] where it can be tested.

pub mod data;

mod categories;
mod overdue;
mod productivity;
mod summary;
mod upcoming;

pub use categories::CategoryBreakdownWidget;
pub use overdue::OverdueTasksWidget;
pub use productivity::ProductivityChartWidget;
pub use summary::TaskSummaryWidget;
pub use upcoming::UpcomingTasksWidget;
