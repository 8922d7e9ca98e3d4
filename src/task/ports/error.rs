//! Errors shared by task data sources and repositories.

use crate::task::domain::{TaskDomainError, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task data source and repository operations.
pub type TasksResult<T> = Result<T, TasksError>;

/// Errors returned by task data sources and repositories.
#[derive(Debug, Clone, Error)]
pub enum TasksError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The data source cannot be reached.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// A stored value failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TasksError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`TasksError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
