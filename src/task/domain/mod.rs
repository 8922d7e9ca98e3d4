//! Domain model for to-do tasks.
//!
//! The domain holds the task value type, its identifier, list filtering and
//! completion statistics. Storage and synchronisation stay outside of the
//! domain boundary.

mod error;
mod filter;
mod ids;
mod stats;
mod task;

pub use error::TaskDomainError;
pub use filter::TasksFilter;
pub use ids::TaskId;
pub use stats::CompletionStats;
pub use task::Task;
