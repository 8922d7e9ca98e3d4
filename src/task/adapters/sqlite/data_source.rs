//! `SQLite` data source implementation for the local task cache.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TasksDataSource, TasksError, TasksResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;
use std::time::Duration;

/// `SQLite` connection pool type used by the task adapter.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema for the `tasks` table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tasks/up.sql");

/// Reverts [`CREATE_TASKS_SQL`]. Also picked up by `diesel migration redo`.
pub const DROP_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tasks/down.sql");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA busy_timeout = {};",
                BUSY_TIMEOUT.as_millis()
            ))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the database at `database_url`.
///
/// In-memory databases exist per connection, so they get a single-connection
/// pool regardless of `max_size`, and that connection is never recycled.
///
/// # Errors
///
/// Returns [`TasksError::Persistence`] when the pool cannot open a
/// connection.
pub fn build_pool(database_url: &str, max_size: u32) -> TasksResult<TaskSqlitePool> {
    let in_memory = database_url == ":memory:" || database_url.contains("mode=memory");
    let size = if in_memory { 1 } else { max_size.max(1) };
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder()
        .max_size(size)
        .connection_customizer(Box::new(ConnectionPragmas));
    if in_memory {
        builder = builder.max_lifetime(None).idle_timeout(None);
    }
    builder.build(manager).map_err(TasksError::persistence)
}

/// Creates the `tasks` table if it does not exist yet.
///
/// # Errors
///
/// Returns [`TasksError::Persistence`] when the schema statements fail.
pub fn run_migrations(connection: &mut SqliteConnection) -> TasksResult<()> {
    connection
        .batch_execute(CREATE_TASKS_SQL)
        .map_err(TasksError::persistence)
}

/// `SQLite`-backed task data source.
#[derive(Debug, Clone)]
pub struct SqliteTasksDataSource {
    pool: TaskSqlitePool,
}

impl SqliteTasksDataSource {
    /// Creates a data source from a connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `database_url` and applies the schema.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] when the database cannot be opened
    /// or migrated.
    pub async fn connect(database_url: &str, max_size: u32) -> TasksResult<Self> {
        let source = Self::new(build_pool(database_url, max_size)?);
        source.migrate().await?;
        Ok(source)
    }

    /// Applies the schema on a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] when the schema statements fail.
    pub async fn migrate(&self) -> TasksResult<()> {
        self.run_blocking(run_migrations).await?;
        tracing::debug!("local task schema is up to date");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> TasksResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TasksResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TasksError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TasksError::persistence)?
    }

    async fn set_completion(&self, id: TaskId, completed: bool) -> TasksResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(id.to_string())))
                .set(tasks::completed.eq(completed))
                .execute(connection)
                .map_err(TasksError::persistence)?;
            if updated == 0 {
                return Err(TasksError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl TasksDataSource for SqliteTasksDataSource {
    async fn get_tasks(&self) -> TasksResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TasksError::persistence)?;
            rows.into_iter()
                .map(|row| Task::try_from(row).map_err(TasksError::from))
                .collect()
        })
        .await
    }

    async fn get_task(&self, id: TaskId) -> TasksResult<Task> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.to_string()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TasksError::persistence)?
                .ok_or(TasksError::NotFound(id))?;
            Ok(Task::try_from(row)?)
        })
        .await
    }

    async fn save_task(&self, task: &Task) -> TasksResult<()> {
        let row = NewTaskRow::from(task);
        self.run_blocking(move |connection| {
            diesel::replace_into(tasks::table)
                .values(&row)
                .execute(connection)
                .map_err(TasksError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn complete_task(&self, id: TaskId) -> TasksResult<()> {
        self.set_completion(id, true).await
    }

    async fn activate_task(&self, id: TaskId) -> TasksResult<()> {
        self.set_completion(id, false).await
    }

    async fn clear_completed_tasks(&self) -> TasksResult<()> {
        self.run_blocking(|connection| {
            diesel::delete(tasks::table.filter(tasks::completed.eq(true)))
                .execute(connection)
                .map_err(TasksError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_all_tasks(&self) -> TasksResult<()> {
        self.run_blocking(|connection| {
            diesel::delete(tasks::table)
                .execute(connection)
                .map_err(TasksError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> TasksResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.to_string())))
                .execute(connection)
                .map_err(TasksError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn replace_all_tasks(&self, snapshot: &[Task]) -> TasksResult<()> {
        let rows: Vec<NewTaskRow> = snapshot.iter().map(NewTaskRow::from).collect();
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|conn| {
                    diesel::delete(tasks::table).execute(conn)?;
                    for row in &rows {
                        diesel::insert_into(tasks::table).values(row).execute(conn)?;
                    }
                    Ok(())
                })
                .map_err(TasksError::persistence)
        })
        .await
    }
}
