//! `SQLite` adapter for the local task cache.

mod data_source;
mod models;
mod schema;

pub use data_source::{
    CREATE_TASKS_SQL, DROP_TASKS_SQL, SqliteTasksDataSource, TaskSqlitePool, build_pool,
    run_migrations,
};
