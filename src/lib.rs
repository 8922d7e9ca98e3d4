//! todo-sync: offline-first storage for to-do tasks.
//!
//! This crate keeps to-do tasks in two tiers, an authoritative remote store
//! and a local cache, and mediates between them with a read-through,
//! write-through repository.
//!
//! # Architecture
//!
//! todo-sync follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for data sources and repositories
//! - **Adapters**: Concrete data sources (in-memory, `SQLite`)
//!
//! # Modules
//!
//! - [`task`]: Task model, storage tiers and synchronisation
//! - [`config`]: Runtime configuration

pub mod config;
pub mod task;
