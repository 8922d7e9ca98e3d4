//! Port contracts for task storage and access.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod data_source;
pub mod error;
pub mod outcome;
pub mod repository;

pub use data_source::TasksDataSource;
pub use error::{TasksError, TasksResult};
pub use outcome::Outcome;
pub use repository::{TasksObserver, TasksRepository};
