//! Business-rule services sitting between callers and the stores.
//!
//! # Responsibility
//! - Enforce validation before any store mutation (validate-before-save,
//!   never partial).
//! - Expose the search/count orchestration consumed by presentation-tier
//!   callers.
//!
//! # Invariants
//! - A rejected call leaves store state untouched.
//! - Create and update share one validation routine per entity type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::model::project::ProjectId;
use crate::model::task::TaskId;

pub mod project_service;
pub mod task_service;

/// Rejected input: a required field is missing or a business rule fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Project name is blank.
    MissingProjectName,
    /// Project owner is blank.
    MissingProjectOwner,
    /// Another project already carries this exact name.
    DuplicateProjectName(String),
    /// Task title is blank.
    MissingTaskTitle,
    /// The referenced project does not exist in the project store.
    UnknownProject(ProjectId),
    /// Due date lies strictly before the current date.
    PastDueDate(NaiveDate),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProjectName => write!(f, "project name is required"),
            Self::MissingProjectOwner => write!(f, "project owner is required"),
            Self::DuplicateProjectName(name) => {
                write!(f, "project name must be unique: `{name}`")
            }
            Self::MissingTaskTitle => write!(f, "task title is required"),
            Self::UnknownProject(id) => write!(f, "project not found with id {id}"),
            Self::PastDueDate(due) => write!(f, "due date cannot be in the past: {due}"),
        }
    }
}

impl Error for ValidationError {}

/// Service-boundary error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input rejected before any mutation.
    Validation(ValidationError),
    /// Operation targeted a task id absent from the store.
    TaskNotFound(TaskId),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found with id {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
