//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::{Task, TaskId};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl TryFrom<TaskRow> for Task {
    type Error = crate::task::domain::TaskDomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let TaskRow {
            id,
            title,
            description,
            completed,
        } = row;
        let task_id = id.parse::<TaskId>()?;
        Ok(Self::with_id(task_id, title, description, completed))
    }
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<&Task> for NewTaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            completed: task.is_completed(),
        }
    }
}
