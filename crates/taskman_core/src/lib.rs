//! Core domain logic for taskman.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskId, TaskPriority};
pub use seed::seed_sample_data;
pub use service::project_service::ProjectService;
pub use service::task_service::TaskService;
pub use service::{ServiceError, ValidationError};
pub use store::project_store::{MemoryProjectStore, ProjectStore};
pub use store::task_store::{MemoryTaskStore, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
