//! Storage adapters for the task module.
//!
//! Each adapter implements the [`TasksDataSource`] port. Either one can play
//! the remote or the local tier of a
//! [`CachedTasksRepository`](crate::task::services::CachedTasksRepository).
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTasksDataSource`]: thread-safe map with optional
//!   simulated latency and outages, used as the remote tier and in tests
//! - [`sqlite::SqliteTasksDataSource`]: persistent local cache using Diesel
//!   over `SQLite`
//!
//! [`TasksDataSource`]: crate::task::ports::TasksDataSource

pub mod memory;
pub mod sqlite;
