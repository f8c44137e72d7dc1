//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskman_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskman_core::{
    seed_sample_data, MemoryProjectStore, MemoryTaskStore, ProjectStore, TaskService, TaskStore,
};

const DEMO_RNG_SEED: u64 = 42;

fn main() {
    let projects = MemoryProjectStore::new();
    let tasks = MemoryTaskStore::new();
    seed_sample_data(&projects, &tasks, DEMO_RNG_SEED);

    let task_service = TaskService::new(&tasks, &projects);

    println!("taskman_core version={}", taskman_core::core_version());
    println!("projects={} tasks={}", projects.count(), tasks.count());
    for project in projects.find_all() {
        let id = project.id.unwrap_or_default();
        println!(
            "project id={id} name={:?} status={} open={} done={}",
            project.name,
            project.status,
            task_service.open_task_count(id),
            task_service.completed_task_count(id)
        );
    }
}
