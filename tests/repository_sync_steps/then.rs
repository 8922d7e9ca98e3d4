//! Then steps for repository synchronisation BDD scenarios.

use super::world::RepositorySyncWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use todo_sync::task::{domain::Task, ports::TasksError};

fn loaded_tasks(world: &RepositorySyncWorld) -> Result<&Vec<Task>, eyre::Report> {
    match world.last_load.as_ref() {
        Some(Ok(tasks)) => Ok(tasks),
        Some(Err(err)) => Err(eyre::eyre!("load failed: {err}")),
        None => Err(eyre::eyre!("missing load result")),
    }
}

#[then("{count:usize} tasks are returned")]
fn tasks_are_returned(world: &RepositorySyncWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = loaded_tasks(world)?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the local cache holds {count:usize} tasks")]
fn local_cache_holds(world: &RepositorySyncWorld, count: usize) -> Result<(), eyre::Report> {
    let cached = world.local.len().wrap_err("count local tasks")?;
    if cached != count {
        return Err(eyre::eyre!("expected {count} cached tasks, found {cached}"));
    }
    Ok(())
}

#[then("the stale task is gone from the local cache")]
fn stale_task_is_gone(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    let stale = world
        .stale_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stale task"))?;
    if world.local.peek(stale.id()).wrap_err("peek local cache")?.is_some() {
        return Err(eyre::eyre!("stale task should have been overwritten"));
    }
    Ok(())
}

#[then("the local cache still holds the stale task")]
fn local_cache_still_holds_stale_task(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    let stale = world
        .stale_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stale task"))?;
    let cached = world.local.peek(stale.id()).wrap_err("peek local cache")?;
    if cached.as_ref() != Some(stale) {
        return Err(eyre::eyre!("expected stale task in cache, found {cached:?}"));
    }
    Ok(())
}

#[then("the late task is not returned")]
fn late_task_not_returned(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    let late = world
        .late_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing late task"))?;
    if loaded_tasks(world)?.contains(late) {
        return Err(eyre::eyre!("cached read should not include {late:?}"));
    }
    Ok(())
}

#[then("the load fails because the remote tier is unavailable")]
fn load_fails_unavailable(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_load
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing load result"))?;
    if !matches!(result, Err(TasksError::Unavailable(_))) {
        return Err(eyre::eyre!("expected Unavailable error, got {result:?}"));
    }
    Ok(())
}

#[then("the task is completed in both tiers")]
fn task_completed_in_both_tiers(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    let task = world
        .tracked_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing tracked task"))?;
    for (tier, source) in [("remote", &world.remote), ("local", &world.local)] {
        let stored = source
            .peek(task.id())
            .wrap_err("peek tier")?
            .ok_or_else(|| eyre::eyre!("task missing from {tier} tier"))?;
        if !stored.is_completed() {
            return Err(eyre::eyre!("task should be completed in {tier} tier"));
        }
    }
    Ok(())
}

#[then("the cache is invalidated")]
fn cache_is_invalidated(world: &RepositorySyncWorld) -> Result<(), eyre::Report> {
    if world.repository.is_cache_valid() {
        return Err(eyre::eyre!("mutation should invalidate the cache"));
    }
    Ok(())
}
