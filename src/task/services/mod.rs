//! Application services for task access and synchronisation.

mod editor;
mod error;
mod messages;
mod repository;
mod statistics;
mod task_list;

pub use editor::TaskEditorService;
pub use error::{TaskServiceError, TaskServiceResult};
pub use messages::{FilterView, TaskMessage};
pub use repository::CachedTasksRepository;
pub use statistics::{StatisticsService, StatisticsView};
pub use task_list::TaskListService;
