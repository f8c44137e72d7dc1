//! Project entity and status enumeration.
//!
//! # Invariants
//! - `id` is assigned once by the store and never mutated afterwards.
//! - `created_at` is populated at first save and pinned on every
//!   subsequent overwrite.
//! - Name uniqueness is a service-level rule, not enforced here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Store-assigned identifier for a project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = u64;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Temporarily paused.
    OnHold,
    /// Delivered and closed.
    Done,
}

impl ProjectStatus {
    /// Human-facing label, as shown by the presentation tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::OnHold => "En Espera",
            Self::Done => "Completado",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A project owning a set of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// `None` until the first save assigns an id.
    pub id: Option<ProjectId>,
    /// Required; unique across the whole store (service-enforced).
    pub name: String,
    /// Required; person responsible for the project.
    pub owner: String,
    pub status: ProjectStatus,
    /// Set at first save; immutable thereafter.
    pub created_at: Option<NaiveDateTime>,
    pub description: Option<String>,
}

impl Project {
    /// Creates an unsaved project with default status `Active`.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            owner: owner.into(),
            status: ProjectStatus::default(),
            created_at: None,
            description,
        }
    }
}

// Identity-based equality: two records are the same project iff they
// carry the same store-assigned id.
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
