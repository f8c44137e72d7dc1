//! Domain model for project/task tracking.
//!
//! # Responsibility
//! - Define the canonical entity shapes shared by stores and services.
//! - Keep entities free of storage and orchestration concerns.
//!
//! # Invariants
//! - Entity identity is the store-assigned id; equality and hashing are
//!   id-based for both entity types.
//! - An entity with `id == None` has never been saved.

pub mod project;
pub mod task;
