//! Task list filtering.

use super::Task;
use serde::{Deserialize, Serialize};

/// Which tasks a list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TasksFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks that are not completed.
    Active,
    /// Completed tasks only.
    Completed,
}

impl TasksFilter {
    /// Returns `true` when the task belongs in a list using this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_active(),
            Self::Completed => task.is_completed(),
        }
    }

    /// Returns the tasks this filter keeps, preserving order.
    #[must_use]
    pub fn apply(self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|task| self.matches(task)).collect()
    }
}
