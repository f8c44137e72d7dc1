//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative id-to-task mapping and project-scoped queries.
//! - Provide the cascading delete used when a project is removed.
//!
//! # Invariants
//! - `delete_by_project` removes the whole project-scoped set under one
//!   lock acquisition; no partial deletion is observable.
//! - The store never checks that `project_id` references a live project;
//!   that is a service-level rule.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskPriority};

/// Store interface for task records.
pub trait TaskStore {
    /// Returns all tasks as a snapshot, in stable ascending-id order.
    fn find_all(&self) -> Vec<Task>;
    fn find_by_id(&self, id: TaskId) -> Option<Task>;
    /// All tasks belonging to the given project.
    fn find_by_project(&self, project_id: ProjectId) -> Vec<Task>;
    /// Project-scoped set, narrowed by priority; `None` skips the filter.
    fn find_by_project_and_priority(
        &self,
        project_id: ProjectId,
        priority: Option<TaskPriority>,
    ) -> Vec<Task>;
    /// Project-scoped set, narrowed by done flag; `None` skips the filter.
    fn find_by_project_and_done(&self, project_id: ProjectId, done: Option<bool>) -> Vec<Task>;
    /// Open tasks of the project whose due date lies strictly before
    /// `today`.
    fn find_overdue(&self, project_id: ProjectId, today: NaiveDate) -> Vec<Task>;
    fn count_by_project(&self, project_id: ProjectId) -> u64;
    fn count_by_project_and_done(&self, project_id: ProjectId, done: bool) -> u64;
    /// Persists the task, assigning an id on first save. Returns the
    /// persisted record with id populated.
    fn save(&self, task: Task) -> Task;
    /// Removes the record; no-op when absent.
    fn delete_by_id(&self, id: TaskId);
    /// Removes every task of the project.
    fn delete_by_project(&self, project_id: ProjectId);
    fn count(&self) -> u64;
}

/// Mutex-guarded in-memory task store.
pub struct MemoryTaskStore {
    records: Mutex<BTreeMap<TaskId, Task>>,
    next_id: AtomicU64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn records(&self) -> MutexGuard<'_, BTreeMap<TaskId, Task>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter<F>(&self, predicate: F) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        self.records()
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryTaskStore {
    fn find_all(&self) -> Vec<Task> {
        self.records().values().cloned().collect()
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.records().get(&id).cloned()
    }

    fn find_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.filter(|task| task.project_id == project_id)
    }

    fn find_by_project_and_priority(
        &self,
        project_id: ProjectId,
        priority: Option<TaskPriority>,
    ) -> Vec<Task> {
        match priority {
            None => self.find_by_project(project_id),
            Some(priority) => {
                self.filter(|task| task.project_id == project_id && task.priority == priority)
            }
        }
    }

    fn find_by_project_and_done(&self, project_id: ProjectId, done: Option<bool>) -> Vec<Task> {
        match done {
            None => self.find_by_project(project_id),
            Some(done) => self.filter(|task| task.project_id == project_id && task.done == done),
        }
    }

    fn find_overdue(&self, project_id: ProjectId, today: NaiveDate) -> Vec<Task> {
        self.filter(|task| task.project_id == project_id && task.is_overdue_on(today))
    }

    fn count_by_project(&self, project_id: ProjectId) -> u64 {
        self.records()
            .values()
            .filter(|task| task.project_id == project_id)
            .count() as u64
    }

    fn count_by_project_and_done(&self, project_id: ProjectId, done: bool) -> u64 {
        self.records()
            .values()
            .filter(|task| task.project_id == project_id && task.done == done)
            .count() as u64
    }

    fn save(&self, mut task: Task) -> Task {
        let mut records = self.records();
        let id = match task.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                task.id = Some(id);
                id
            }
        };
        records.insert(id, task.clone());
        debug!("event=task_saved module=store id={id} project_id={}", task.project_id);
        task
    }

    fn delete_by_id(&self, id: TaskId) {
        if self.records().remove(&id).is_some() {
            debug!("event=task_deleted module=store id={id}");
        }
    }

    fn delete_by_project(&self, project_id: ProjectId) {
        let mut records = self.records();
        let before = records.len();
        records.retain(|_, task| task.project_id != project_id);
        let removed = before - records.len();
        if removed > 0 {
            debug!("event=tasks_deleted_by_project module=store project_id={project_id} removed={removed}");
        }
    }

    fn count(&self) -> u64 {
        self.records().len() as u64
    }
}
