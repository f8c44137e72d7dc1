//! Deterministic sample data for fresh stores.
//!
//! # Responsibility
//! - Load the stock demo projects and tasks into empty stores at startup.
//!
//! # Invariants
//! - All randomness (back-dated creation timestamps, done flags) comes
//!   from one seeded generator, so equal seeds produce equal stores.
//! - Seeding only uses the public store `save` API; due dates of the
//!   demo tasks may lie in the past because stores do not validate.

use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::task::{Task, TaskPriority};
use crate::store::project_store::ProjectStore;
use crate::store::task_store::TaskStore;

/// Seeds both stores with the stock demo records.
///
/// Four projects and eleven tasks; task due dates are offsets from the
/// current date, some deliberately in the past so the overdue views have
/// content to show.
pub fn seed_sample_data<P, T>(projects: &P, tasks: &T, rng_seed: u64)
where
    P: ProjectStore,
    T: TaskStore,
{
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let inventory = seed_project(
        projects,
        &mut rng,
        "Sistema de Gestión de Inventarios",
        "Juan Pérez",
        "Desarrollo de un sistema completo para la gestión de inventarios de la empresa",
        ProjectStatus::Active,
    );
    let cloud = seed_project(
        projects,
        &mut rng,
        "Migración a la Nube",
        "María García",
        "Migración de sistemas legacy a infraestructura cloud",
        ProjectStatus::OnHold,
    );
    let portal = seed_project(
        projects,
        &mut rng,
        "Portal de Clientes",
        "Carlos López",
        "Desarrollo de portal web para clientes con funcionalidades de autogestión",
        ProjectStatus::Active,
    );
    let reports = seed_project(
        projects,
        &mut rng,
        "Automatización de Reportes",
        "Ana Martínez",
        "Sistema automatizado para generación de reportes financieros",
        ProjectStatus::Done,
    );

    let today = Local::now().date_naive();
    let rows: [(ProjectId, &str, TaskPriority, i64, &str); 11] = [
        (
            inventory,
            "Diseñar base de datos",
            TaskPriority::High,
            5,
            "Crear el modelo de datos para inventarios",
        ),
        (
            inventory,
            "Implementar API REST",
            TaskPriority::High,
            10,
            "Desarrollar endpoints para CRUD de productos",
        ),
        (
            inventory,
            "Crear interfaz de usuario",
            TaskPriority::Medium,
            15,
            "Diseñar y desarrollar la UI con React",
        ),
        (
            inventory,
            "Configurar servidor de producción",
            TaskPriority::Low,
            20,
            "Preparar ambiente de producción",
        ),
        (
            cloud,
            "Evaluar proveedores cloud",
            TaskPriority::High,
            -2,
            "Comparar AWS, Azure y Google Cloud",
        ),
        (
            cloud,
            "Crear plan de migración",
            TaskPriority::Medium,
            7,
            "Documentar pasos para migración",
        ),
        (
            portal,
            "Diseñar wireframes",
            TaskPriority::Medium,
            3,
            "Crear mockups del portal",
        ),
        (
            portal,
            "Implementar autenticación",
            TaskPriority::High,
            8,
            "Sistema de login y registro",
        ),
        (
            portal,
            "Desarrollar dashboard",
            TaskPriority::Medium,
            12,
            "Panel principal del portal",
        ),
        (
            reports,
            "Configurar automatización",
            TaskPriority::Low,
            -5,
            "Setup de jobs automáticos",
        ),
        (
            reports,
            "Crear plantillas de reportes",
            TaskPriority::Medium,
            -1,
            "Diseñar formatos de reportes",
        ),
    ];

    for (project_id, title, priority, due_offset_days, notes) in rows {
        seed_task(tasks, &mut rng, project_id, title, priority, due_in(today, due_offset_days), notes);
    }
}

fn seed_project<P: ProjectStore>(
    store: &P,
    rng: &mut StdRng,
    name: &str,
    owner: &str,
    description: &str,
    status: ProjectStatus,
) -> ProjectId {
    let mut project = Project::new(name, owner, Some(description.to_string()));
    project.status = status;
    let backdate_days = rng.random_range(0..30);
    project.created_at = Some((Local::now() - Duration::days(backdate_days)).naive_local());
    store.save(project).id.unwrap_or_default()
}

fn seed_task<T: TaskStore>(
    store: &T,
    rng: &mut StdRng,
    project_id: ProjectId,
    title: &str,
    priority: TaskPriority,
    due_date: NaiveDate,
    notes: &str,
) {
    let mut task = Task::new(project_id, title);
    task.priority = priority;
    task.due_date = Some(due_date);
    task.notes = Some(notes.to_string());
    task.done = rng.random();
    store.save(task);
}

fn due_in(today: NaiveDate, offset_days: i64) -> NaiveDate {
    today + Duration::days(offset_days)
}
