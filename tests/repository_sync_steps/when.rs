//! When steps for repository synchronisation BDD scenarios.

use super::world::{RepositorySyncWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todo_sync::task::ports::TasksRepository;

#[when("tasks are loaded with force update")]
fn tasks_loaded_with_force_update(world: &mut RepositorySyncWorld) {
    world.last_load = Some(run_async(world.repository.get_tasks(true)));
}

#[when("tasks are loaded from the cache")]
fn tasks_loaded_from_cache(world: &mut RepositorySyncWorld) {
    world.last_load = Some(run_async(world.repository.get_tasks(false)));
}

#[when("the task is completed")]
fn task_is_completed(world: &mut RepositorySyncWorld) -> Result<(), eyre::Report> {
    let task = world
        .tracked_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing tracked task in scenario world"))?;
    run_async(world.repository.complete_task(task)).wrap_err("complete tracked task")?;
    Ok(())
}
