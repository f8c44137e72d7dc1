use chrono::{Duration, Local, NaiveDate};
use taskman_core::{MemoryTaskStore, Task, TaskPriority, TaskStore};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn task(project_id: u64, title: &str) -> Task {
    Task::new(project_id, title)
}

#[test]
fn save_assigns_monotonic_ids_and_preserves_existing_ones() {
    let store = MemoryTaskStore::new();

    let first = store.save(task(1, "a"));
    let second = store.save(task(1, "b"));
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));

    let mut update = second.clone();
    update.title = "b2".to_string();
    let updated = store.save(update);
    assert_eq!(updated.id, Some(2));
    assert_eq!(store.count(), 2);
}

#[test]
fn find_by_project_scopes_to_one_project() {
    let store = MemoryTaskStore::new();
    store.save(task(1, "a"));
    store.save(task(1, "b"));
    store.save(task(2, "c"));

    let scoped = store.find_by_project(1);
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|t| t.project_id == 1));

    assert_eq!(store.find_all().len(), 3);
    assert!(store.find_by_project(99).is_empty());
}

#[test]
fn priority_filter_narrows_and_none_short_circuits() {
    let store = MemoryTaskStore::new();
    let mut high = task(1, "urgent");
    high.priority = TaskPriority::High;
    store.save(high);
    store.save(task(1, "normal"));
    let mut other_project_high = task(2, "elsewhere");
    other_project_high.priority = TaskPriority::High;
    store.save(other_project_high);

    let highs = store.find_by_project_and_priority(1, Some(TaskPriority::High));
    assert_eq!(highs.len(), 1);
    assert_eq!(highs[0].title, "urgent");

    assert_eq!(store.find_by_project_and_priority(1, None).len(), 2);
}

#[test]
fn done_filter_narrows_and_none_short_circuits() {
    let store = MemoryTaskStore::new();
    let mut finished = task(1, "finished");
    finished.done = true;
    store.save(finished);
    store.save(task(1, "open"));

    let done = store.find_by_project_and_done(1, Some(true));
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "finished");

    let open = store.find_by_project_and_done(1, Some(false));
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].title, "open");

    assert_eq!(store.find_by_project_and_done(1, None).len(), 2);
}

#[test]
fn overdue_excludes_done_due_today_and_other_projects() {
    let store = MemoryTaskStore::new();
    let reference = today();

    let mut late = task(1, "late");
    late.due_date = Some(reference - Duration::days(2));
    store.save(late);

    let mut late_but_done = task(1, "late but done");
    late_but_done.due_date = Some(reference - Duration::days(2));
    late_but_done.done = true;
    store.save(late_but_done);

    let mut due_today = task(1, "due today");
    due_today.due_date = Some(reference);
    store.save(due_today);

    let mut other_project = task(2, "late elsewhere");
    other_project.due_date = Some(reference - Duration::days(1));
    store.save(other_project);

    let overdue = store.find_overdue(1, reference);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].title, "late");
}

#[test]
fn counts_track_project_and_done_flag() {
    let store = MemoryTaskStore::new();
    store.save(task(1, "a"));
    let mut b = task(1, "b");
    b.done = true;
    store.save(b);
    store.save(task(2, "c"));

    assert_eq!(store.count_by_project(1), 2);
    assert_eq!(store.count_by_project_and_done(1, true), 1);
    assert_eq!(store.count_by_project_and_done(1, false), 1);
    assert_eq!(store.count(), 3);
}

#[test]
fn delete_by_project_removes_the_whole_scoped_set() {
    let store = MemoryTaskStore::new();
    store.save(task(1, "a"));
    store.save(task(1, "b"));
    store.save(task(2, "c"));

    store.delete_by_project(1);

    assert!(store.find_by_project(1).is_empty());
    assert_eq!(store.count(), 1);
    assert_eq!(store.find_all()[0].project_id, 2);
}

#[test]
fn delete_by_id_is_a_noop_for_unknown_ids() {
    let store = MemoryTaskStore::new();
    store.save(task(1, "a"));

    store.delete_by_id(42);
    assert_eq!(store.count(), 1);
}

#[test]
fn saved_task_round_trips_all_fields() {
    let store = MemoryTaskStore::new();
    let mut input = task(3, "Diseñar wireframes");
    input.priority = TaskPriority::High;
    input.due_date = Some(today() + Duration::days(3));
    input.notes = Some("Crear mockups del portal".to_string());

    let saved = store.save(input);
    let loaded = store.find_by_id(saved.id.unwrap()).unwrap();

    assert_eq!(loaded.project_id, 3);
    assert_eq!(loaded.title, "Diseñar wireframes");
    assert_eq!(loaded.priority, TaskPriority::High);
    assert_eq!(loaded.due_date, saved.due_date);
    assert_eq!(loaded.notes.as_deref(), Some("Crear mockups del portal"));
    assert!(!loaded.done);
}
