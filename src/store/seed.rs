//! Fixture records loaded into a fresh store at startup. Mirrors the GSI
//! demo data set: one administrator account, two employees, two projects,
//! two tasks. Fixed ids so the records are addressable in demos and tests.

use chrono::{TimeZone, Utc};

use crate::auth::password::hash_password;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::user::{User, UserRole};

use super::Store;

/// Default administrator credentials; the password is argon2-hashed at
/// seed time, never stored in the clear.
pub const ADMIN_EMAIL: &str = "admin@governancesystemsint.com";
pub const ADMIN_PASSWORD: &str = "changeme";

pub fn load(store: &Store) {
    let now = Utc::now();

    let admin = User {
        id: "admin-1".into(),
        email: ADMIN_EMAIL.into(),
        password: hash_password(ADMIN_PASSWORD),
        first_name: "John".into(),
        last_name: "Doe".into(),
        role: UserRole::Administrator,
        permissions: vec!["read".into(), "write".into(), "admin".into()],
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    store.users.insert(admin.id.clone(), admin);

    let employees = [
        Employee {
            id: "emp-1".into(),
            employee_id: "GSI001".into(),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@governancesystemsint.com".into(),
            phone: Some("+256757578580".into()),
            position: "Project Manager".into(),
            department: "Operations".into(),
            hire_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
            salary: Some(75000.0),
            status: EmployeeStatus::Active,
            manager_id: None,
            created_at: now,
            updated_at: now,
        },
        Employee {
            id: "emp-2".into(),
            employee_id: "GSI002".into(),
            first_name: "Mark".into(),
            last_name: "Johnson".into(),
            email: "mark.johnson@governancesystemsint.com".into(),
            phone: Some("+256757578581".into()),
            position: "Senior Consultant".into(),
            department: "Consulting".into(),
            hire_date: Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap(),
            salary: Some(85000.0),
            status: EmployeeStatus::Active,
            manager_id: Some("emp-1".into()),
            created_at: now,
            updated_at: now,
        },
    ];
    for employee in employees {
        store.employees.insert(employee.id.clone(), employee);
    }

    let projects = [
        Project {
            id: "proj-1".into(),
            name: "USAID Uganda Feed the Future, Inclusive Agricultural Markets Activity".into(),
            description: Some("Supporting agricultural market development in Uganda".into()),
            client: "USAID".into(),
            status: ProjectStatus::Active,
            start_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            end_date: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            budget: Some(500000.0),
            progress: 85,
            manager_id: Some("emp-1".into()),
            created_at: now,
            updated_at: now,
        },
        Project {
            id: "proj-2".into(),
            name: "Water Reservoir Development - Karamoja".into(),
            description: Some(
                "Facilitating Free Prior and Informed Consent for water reservoirs".into(),
            ),
            client: "Ministry of Water and Environment".into(),
            status: ProjectStatus::Active,
            start_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            end_date: Some(Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap()),
            budget: Some(300000.0),
            progress: 62,
            manager_id: Some("emp-2".into()),
            created_at: now,
            updated_at: now,
        },
    ];
    for project in projects {
        store.projects.insert(project.id.clone(), project);
    }

    let tasks = [
        Task {
            id: "task-1".into(),
            title: "Project proposal review".into(),
            description: Some("Review AfDB water project proposal".into()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assignee_id: Some("emp-1".into()),
            project_id: Some("proj-2".into()),
            due_date: Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()),
            completed_at: None,
            created_at: now,
            updated_at: now,
        },
        Task {
            id: "task-2".into(),
            title: "Staff training coordination".into(),
            description: Some("Quarterly skills development training".into()),
            status: TaskStatus::Completed,
            priority: TaskPriority::Medium,
            assignee_id: Some("emp-2".into()),
            project_id: None,
            due_date: Some(Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap()),
            completed_at: Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()),
            created_at: now,
            updated_at: now,
        },
    ];
    for task in tasks {
        store.tasks.insert(task.id.clone(), task);
    }
}
