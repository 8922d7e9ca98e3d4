//! In-memory task storage.

mod data_source;

pub use data_source::{InMemoryTasksDataSource, SEEDED_TASKS};
