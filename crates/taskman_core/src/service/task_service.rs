//! Task use-case service.
//!
//! # Responsibility
//! - Enforce title presence, live project reference and the non-past
//!   due date rule before saving.
//! - Provide the derived overdue/count accessors used by project views.
//!
//! # Invariants
//! - Create and update route through the same validation routine; update
//!   revalidates the due date against the current date.
//! - `toggle_task_completion` is a store-level flip-and-save and does not
//!   revalidate, so a past-due task can still be marked done.

use chrono::{Local, NaiveDate};
use log::info;

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId, TaskPriority};
use crate::service::{ServiceError, ValidationError};
use crate::store::project_store::ProjectStore;
use crate::store::task_store::TaskStore;

/// Validation and orchestration atop a task store, with read access to
/// the project store for referential checks.
pub struct TaskService<'a, T: TaskStore, P: ProjectStore> {
    tasks: &'a T,
    projects: &'a P,
}

impl<'a, T: TaskStore, P: ProjectStore> TaskService<'a, T, P> {
    /// Creates a service over the given store instances.
    pub fn new(tasks: &'a T, projects: &'a P) -> Self {
        Self { tasks, projects }
    }

    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.find_all()
    }

    pub fn task_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.find_by_id(id)
    }

    pub fn tasks_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.tasks.find_by_project(project_id)
    }

    pub fn tasks_by_project_and_priority(
        &self,
        project_id: ProjectId,
        priority: Option<TaskPriority>,
    ) -> Vec<Task> {
        self.tasks.find_by_project_and_priority(project_id, priority)
    }

    pub fn tasks_by_project_and_done(
        &self,
        project_id: ProjectId,
        done: Option<bool>,
    ) -> Vec<Task> {
        self.tasks.find_by_project_and_done(project_id, done)
    }

    /// Open tasks of the project due strictly before today.
    pub fn overdue_tasks(&self, project_id: ProjectId) -> Vec<Task> {
        self.tasks.find_overdue(project_id, current_date())
    }

    /// Validates and persists a new task.
    pub fn create_task(&self, task: Task) -> Result<Task, ServiceError> {
        self.validate_task(&task)?;
        let saved = self.tasks.save(task);
        info!(
            "event=task_created module=service id={} project_id={}",
            saved.id.unwrap_or_default(),
            saved.project_id
        );
        Ok(saved)
    }

    /// Validates and overwrites an existing task.
    pub fn update_task(&self, task: Task) -> Result<Task, ServiceError> {
        self.validate_task(&task)?;
        Ok(self.tasks.save(task))
    }

    pub fn delete_task(&self, id: TaskId) {
        self.tasks.delete_by_id(id);
    }

    /// Cascading delete of every task under the project.
    pub fn delete_tasks_by_project(&self, project_id: ProjectId) {
        self.tasks.delete_by_project(project_id);
        info!("event=tasks_cascade_deleted module=service project_id={project_id}");
    }

    /// Flips the done flag and saves. Errors when no task exists for the
    /// id. Bypasses validation on purpose: completing a task must work
    /// even when its due date has passed.
    pub fn toggle_task_completion(&self, id: TaskId) -> Result<Task, ServiceError> {
        let Some(mut task) = self.tasks.find_by_id(id) else {
            return Err(ServiceError::TaskNotFound(id));
        };
        task.done = !task.done;
        Ok(self.tasks.save(task))
    }

    /// False for done tasks regardless of due date; otherwise true iff a
    /// due date exists and lies strictly before today.
    pub fn is_task_overdue(&self, task: &Task) -> bool {
        task.is_overdue_on(current_date())
    }

    pub fn task_count_by_project(&self, project_id: ProjectId) -> u64 {
        self.tasks.count_by_project(project_id)
    }

    pub fn task_count_by_project_and_done(&self, project_id: ProjectId, done: bool) -> u64 {
        self.tasks.count_by_project_and_done(project_id, done)
    }

    /// Count of not-yet-done tasks in the project.
    pub fn open_task_count(&self, project_id: ProjectId) -> u64 {
        self.task_count_by_project_and_done(project_id, false)
    }

    /// Count of done tasks in the project.
    pub fn completed_task_count(&self, project_id: ProjectId) -> u64 {
        self.task_count_by_project_and_done(project_id, true)
    }

    pub fn total_task_count(&self) -> u64 {
        self.tasks.count()
    }

    fn validate_task(&self, task: &Task) -> Result<(), ValidationError> {
        if task.title.trim().is_empty() {
            return Err(ValidationError::MissingTaskTitle);
        }
        if self.projects.find_by_id(task.project_id).is_none() {
            return Err(ValidationError::UnknownProject(task.project_id));
        }
        if let Some(due) = task.due_date {
            if due < current_date() {
                return Err(ValidationError::PastDueDate(due));
            }
        }
        Ok(())
    }
}

fn current_date() -> NaiveDate {
    Local::now().date_naive()
}
