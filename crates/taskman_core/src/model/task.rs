//! Task entity and priority enumeration.
//!
//! # Invariants
//! - `id` is assigned once by the store and never mutated afterwards.
//! - `project_id` must reference an existing project at service-level
//!   validation time; the store itself does not check it.
//! - The non-past due date rule is a service-level rule, not enforced here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::model::project::ProjectId;

/// Store-assigned identifier for a task.
pub type TaskId = u64;

/// Urgency level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Human-facing label, as shown by the presentation tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Baja",
            Self::Medium => "Media",
            Self::High => "Alta",
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// `None` until the first save assigns an id.
    pub id: Option<TaskId>,
    pub project_id: ProjectId,
    /// Required, non-blank (service-enforced).
    pub title: String,
    pub priority: TaskPriority,
    /// Optional; must not lie in the past at create/update time
    /// (service-enforced).
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub notes: Option<String>,
}

impl Task {
    /// Creates an unsaved open task with default priority `Medium`.
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id: None,
            project_id,
            title: title.into(),
            priority: TaskPriority::default(),
            due_date: None,
            done: false,
            notes: None,
        }
    }

    /// Whether this task counts as overdue on the given reference date.
    ///
    /// Done tasks are never overdue; a task without a due date is never
    /// overdue. Due exactly on `today` is not overdue.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        if self.done {
            return false;
        }
        self.due_date.is_some_and(|due| due < today)
    }
}

// Identity-based equality, mirroring `Project`.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
