//! Project store contract and in-memory implementation.
//!
//! # Responsibility
//! - Exclusive owner of the authoritative id-to-project mapping.
//! - Generate ids and answer the read queries used by search.
//!
//! # Invariants
//! - `save` assigns id and creation timestamp exactly once, at first save.
//! - `created_at` is pinned on overwrite; callers cannot rewrite it.
//! - Name uniqueness checks here are exact and case-sensitive; the
//!   case-insensitive matching belongs to the substring search queries.

use log::debug;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::project::{Project, ProjectId, ProjectStatus};

/// Store interface for project records.
pub trait ProjectStore {
    /// Returns all projects as a snapshot, in stable ascending-id order.
    fn find_all(&self) -> Vec<Project>;
    fn find_by_id(&self, id: ProjectId) -> Option<Project>;
    /// Case-insensitive substring match on name; blank input returns all.
    fn find_by_name_containing(&self, name: &str) -> Vec<Project>;
    /// Case-insensitive substring match on owner; blank input returns all.
    fn find_by_owner_containing(&self, owner: &str) -> Vec<Project>;
    fn find_by_status(&self, status: ProjectStatus) -> Vec<Project>;
    /// Case-insensitive substring match against name OR owner; blank term
    /// returns all.
    fn find_by_name_or_owner_containing(&self, term: &str) -> Vec<Project>;
    /// Conjunction of the term filter and an optional exact status filter.
    fn find_by_name_or_owner_containing_and_status(
        &self,
        term: &str,
        status: Option<ProjectStatus>,
    ) -> Vec<Project>;
    /// Exact, case-sensitive name existence check.
    fn exists_by_name(&self, name: &str) -> bool;
    /// As `exists_by_name`, ignoring the record with the given id.
    fn exists_by_name_excluding(&self, name: &str, exclude: ProjectId) -> bool;
    /// Persists the project, assigning id and creation timestamp on first
    /// save. Returns the persisted record with id populated.
    fn save(&self, project: Project) -> Project;
    /// Removes the record; no-op when absent.
    fn delete_by_id(&self, id: ProjectId);
    fn count(&self) -> u64;
}

/// Mutex-guarded in-memory project store.
///
/// The map is keyed by id in a `BTreeMap`, so iteration order is
/// ascending id and stays stable for an unmutated store.
pub struct MemoryProjectStore {
    records: Mutex<BTreeMap<ProjectId, Project>>,
    next_id: AtomicU64,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // A poisoned lock only means another caller panicked mid-operation;
    // the map itself is still structurally sound.
    fn records(&self) -> MutexGuard<'_, BTreeMap<ProjectId, Project>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter<F>(&self, predicate: F) -> Vec<Project>
    where
        F: Fn(&Project) -> bool,
    {
        self.records()
            .values()
            .filter(|project| predicate(project))
            .cloned()
            .collect()
    }
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn find_all(&self) -> Vec<Project> {
        self.records().values().cloned().collect()
    }

    fn find_by_id(&self, id: ProjectId) -> Option<Project> {
        self.records().get(&id).cloned()
    }

    fn find_by_name_containing(&self, name: &str) -> Vec<Project> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return self.find_all();
        }
        self.filter(|project| project.name.to_lowercase().contains(&needle))
    }

    fn find_by_owner_containing(&self, owner: &str) -> Vec<Project> {
        let needle = owner.trim().to_lowercase();
        if needle.is_empty() {
            return self.find_all();
        }
        self.filter(|project| project.owner.to_lowercase().contains(&needle))
    }

    fn find_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.filter(|project| project.status == status)
    }

    fn find_by_name_or_owner_containing(&self, term: &str) -> Vec<Project> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.find_all();
        }
        self.filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project.owner.to_lowercase().contains(&needle)
        })
    }

    fn find_by_name_or_owner_containing_and_status(
        &self,
        term: &str,
        status: Option<ProjectStatus>,
    ) -> Vec<Project> {
        let matched = self.find_by_name_or_owner_containing(term);
        match status {
            None => matched,
            Some(status) => matched
                .into_iter()
                .filter(|project| project.status == status)
                .collect(),
        }
    }

    fn exists_by_name(&self, name: &str) -> bool {
        self.records()
            .values()
            .any(|project| project.name == name)
    }

    fn exists_by_name_excluding(&self, name: &str, exclude: ProjectId) -> bool {
        self.records()
            .values()
            .any(|project| project.name == name && project.id != Some(exclude))
    }

    fn save(&self, mut project: Project) -> Project {
        let mut records = self.records();
        let id = match project.id {
            Some(id) => {
                // Creation timestamp is pinned once a record exists.
                if let Some(existing) = records.get(&id) {
                    project.created_at = existing.created_at;
                }
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                project.id = Some(id);
                if project.created_at.is_none() {
                    project.created_at = Some(chrono::Local::now().naive_local());
                }
                id
            }
        };
        records.insert(id, project.clone());
        debug!("event=project_saved module=store id={id}");
        project
    }

    fn delete_by_id(&self, id: ProjectId) {
        if self.records().remove(&id).is_some() {
            debug!("event=project_deleted module=store id={id}");
        }
    }

    fn count(&self) -> u64 {
        self.records().len() as u64
    }
}
