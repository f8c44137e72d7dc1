use taskman_core::{
    MemoryProjectStore, Project, ProjectService, ProjectStatus, ProjectStore, ServiceError,
    ValidationError,
};

fn project(name: &str, owner: &str) -> Project {
    Project::new(name, owner, None)
}

#[test]
fn create_assigns_id_and_persists() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let saved = service.create_project(project("Alpha", "Bob")).unwrap();
    assert!(saved.id.is_some());
    assert_eq!(service.project_count(), 1);
    assert_eq!(service.project_by_id(saved.id.unwrap()).unwrap().name, "Alpha");
}

#[test]
fn blank_name_is_rejected_without_mutation() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let err = service.create_project(project("   ", "Bob")).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::MissingProjectName)
    );
    assert_eq!(service.project_count(), 0);
}

#[test]
fn blank_owner_is_rejected_without_mutation() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let err = service.create_project(project("Alpha", "")).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::MissingProjectOwner)
    );
    assert_eq!(service.project_count(), 0);
}

#[test]
fn duplicate_name_is_rejected_and_count_unchanged() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    service.create_project(project("Alpha", "Bob")).unwrap();
    let err = service.create_project(project("Alpha", "Alice")).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::DuplicateProjectName(ref name)) if name == "Alpha"
    ));
    assert_eq!(service.project_count(), 1);
}

#[test]
fn update_may_keep_its_own_name_but_not_take_anothers() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let alpha = service.create_project(project("Alpha", "Bob")).unwrap();
    service.create_project(project("Beta", "Alice")).unwrap();

    // Same name, same record: allowed.
    let mut renamed = alpha.clone();
    renamed.owner = "Carol".to_string();
    service.update_project(renamed).unwrap();

    // Colliding with the other project's name: rejected.
    let mut collision = service.project_by_id(alpha.id.unwrap()).unwrap();
    collision.name = "Beta".to_string();
    let err = service.update_project(collision).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::DuplicateProjectName(_))
    ));
}

#[test]
fn name_uniqueness_treats_blank_as_no_conflict() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);
    service.create_project(project("Alpha", "Bob")).unwrap();

    assert!(service.is_project_name_unique("", None));
    assert!(service.is_project_name_unique("Beta", None));
    assert!(!service.is_project_name_unique("Alpha", None));
}

#[test]
fn name_uniqueness_excludes_the_given_record() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);
    let alpha = service.create_project(project("Alpha", "Bob")).unwrap();

    assert!(service.is_project_name_unique("Alpha", alpha.id));
    assert!(!service.is_project_name_unique("Alpha", Some(alpha.id.unwrap() + 1)));
}

#[test]
fn search_precedence_term_beats_status_beats_all() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let mut held = project("Migración a la Nube", "María García");
    held.status = ProjectStatus::OnHold;
    service.create_project(held).unwrap();
    service
        .create_project(project("Portal de Clientes", "Carlos López"))
        .unwrap();

    // Non-blank term: combined name/owner + status filter.
    let hits = service.search_projects(Some("nube"), Some(ProjectStatus::OnHold));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Migración a la Nube");

    let misses = service.search_projects(Some("nube"), Some(ProjectStatus::Active));
    assert!(misses.is_empty());

    // Blank term with status: status-only filter.
    let by_status = service.search_projects(Some("  "), Some(ProjectStatus::Active));
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].name, "Portal de Clientes");

    // Neither: everything.
    assert_eq!(service.search_projects(None, None).len(), 2);
}

#[test]
fn delete_removes_the_project_unconditionally() {
    let store = MemoryProjectStore::new();
    let service = ProjectService::new(&store);

    let saved = service.create_project(project("Alpha", "Bob")).unwrap();
    service.delete_project(saved.id.unwrap());

    assert_eq!(service.project_count(), 0);
    assert!(store.find_by_id(saved.id.unwrap()).is_none());
}
