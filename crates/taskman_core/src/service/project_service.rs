//! Project use-case service.
//!
//! # Responsibility
//! - Enforce name/owner presence and name uniqueness before saving.
//! - Compose the search precedence used by the project list page.
//!
//! # Invariants
//! - Create and update route through the same validation routine.
//! - Deleting a project does not cascade to its tasks; callers pair it
//!   with `TaskService::delete_tasks_by_project`.

use log::info;

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::service::{ServiceError, ValidationError};
use crate::store::project_store::ProjectStore;

/// Validation and orchestration atop a project store.
pub struct ProjectService<'a, S: ProjectStore> {
    store: &'a S,
}

impl<'a, S: ProjectStore> ProjectService<'a, S> {
    /// Creates a service over the given store instance.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn all_projects(&self) -> Vec<Project> {
        self.store.find_all()
    }

    pub fn project_by_id(&self, id: ProjectId) -> Option<Project> {
        self.store.find_by_id(id)
    }

    /// Searches with three-way precedence: a non-blank term uses the
    /// combined name/owner+status query; otherwise a present status
    /// filters by status alone; otherwise all projects are returned.
    pub fn search_projects(
        &self,
        term: Option<&str>,
        status: Option<ProjectStatus>,
    ) -> Vec<Project> {
        match term {
            Some(term) if !term.trim().is_empty() => self
                .store
                .find_by_name_or_owner_containing_and_status(term, status),
            _ => match status {
                Some(status) => self.store.find_by_status(status),
                None => self.store.find_all(),
            },
        }
    }

    /// Validates and persists a new project.
    pub fn create_project(&self, project: Project) -> Result<Project, ServiceError> {
        self.validate_project(&project)?;
        let saved = self.store.save(project);
        info!(
            "event=project_created module=service id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Validates and overwrites an existing project.
    pub fn update_project(&self, project: Project) -> Result<Project, ServiceError> {
        self.validate_project(&project)?;
        Ok(self.store.save(project))
    }

    /// Unconditionally deletes the project. Tasks still referencing it
    /// become dangling; cascading cleanup is the caller's call.
    pub fn delete_project(&self, id: ProjectId) {
        self.store.delete_by_id(id);
        info!("event=project_delete_requested module=service id={id}");
    }

    /// Blank names never conflict; otherwise true iff no other project
    /// carries this exact name (ignoring `exclude` when given).
    pub fn is_project_name_unique(&self, name: &str, exclude: Option<ProjectId>) -> bool {
        if name.trim().is_empty() {
            return true;
        }
        match exclude {
            None => !self.store.exists_by_name(name),
            Some(id) => !self.store.exists_by_name_excluding(name, id),
        }
    }

    pub fn project_count(&self) -> u64 {
        self.store.count()
    }

    fn validate_project(&self, project: &Project) -> Result<(), ValidationError> {
        if project.name.trim().is_empty() {
            return Err(ValidationError::MissingProjectName);
        }
        if project.owner.trim().is_empty() {
            return Err(ValidationError::MissingProjectOwner);
        }
        if !self.is_project_name_unique(&project.name, project.id) {
            return Err(ValidationError::DuplicateProjectName(project.name.clone()));
        }
        Ok(())
    }
}
