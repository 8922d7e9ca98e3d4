//! To-do task storage and synchronisation.
//!
//! Tasks live in two tiers: an authoritative remote tier and a local cache.
//! [`services::CachedTasksRepository`] mediates between them, reading through
//! the cache and writing through to both tiers. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
