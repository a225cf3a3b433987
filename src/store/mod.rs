//! In-memory entity store.
//!
//! One `Collection` per entity type, each behind its own `RwLock` so that
//! concurrent requests never observe a torn write. Iteration order is id
//! order (BTreeMap), which is stable for the life of the process; the
//! specialized filters below return records in that same relative order.
//!
//! Not-found is a return value (`Option`/`bool`), never an error. The store
//! performs no referential checks: `managerId`, `assigneeId` and friends may
//! dangle and readers are expected to tolerate that.

pub mod seed;

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::model::asset::{Asset, AssetStatus, CreateAsset, UpdateAsset};
use crate::model::employee::{CreateEmployee, Employee, EmployeeStatus, UpdateEmployee};
use crate::model::evaluation::{CreateEvaluation, Evaluation, UpdateEvaluation};
use crate::model::kpi::{CreateKpi, Kpi, UpdateKpi};
use crate::model::payroll::{CreatePayroll, PayrollRecord, PayrollStatus, UpdatePayroll};
use crate::model::project::{CreateProject, Project, ProjectStatus, UpdateProject};
use crate::model::proposal::{CreateProposal, Proposal, ProposalStatus, UpdateProposal};
use crate::model::report::{Report, ReportStatus};
use crate::model::task::{CreateTask, Task, TaskPriority, TaskStatus, UpdateTask};
use crate::model::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use crate::model::user::{CreateUser, UpdateUser, User, UserRole};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A keyed record set behind a single writer lock.
pub struct Collection<T> {
    items: RwLock<BTreeMap<String, T>>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, T>> {
        self.items.read().expect("collection lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, T>> {
        self.items.write().expect("collection lock poisoned")
    }

    pub fn list(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().values().filter(|t| pred(t)).cloned().collect()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.read().values().find(|t| pred(t)).cloned()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    fn insert(&self, id: String, record: T) -> T {
        self.write().insert(id, record.clone());
        record
    }

    /// Applies `f` to the record if present; returns the updated copy.
    fn update_with(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut items = self.write();
        let record = items.get_mut(id)?;
        f(record);
        Some(record.clone())
    }

    /// True only if a record was actually removed; idempotent.
    fn remove(&self, id: &str) -> bool {
        self.write().remove(id).is_some()
    }
}

/// The process-lifetime data store. Constructed explicitly (never a global)
/// and handed to the facade as `web::Data<Store>`, so tests can build
/// isolated instances.
pub struct Store {
    pub users: Collection<User>,
    pub employees: Collection<Employee>,
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
    pub kpis: Collection<Kpi>,
    pub transactions: Collection<Transaction>,
    pub payroll: Collection<PayrollRecord>,
    pub proposals: Collection<Proposal>,
    pub evaluations: Collection<Evaluation>,
    pub reports: Collection<Report>,
    pub assets: Collection<Asset>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            employees: Collection::new(),
            projects: Collection::new(),
            tasks: Collection::new(),
            kpis: Collection::new(),
            transactions: Collection::new(),
            payroll: Collection::new(),
            proposals: Collection::new(),
            evaluations: Collection::new(),
            reports: Collection::new(),
            assets: Collection::new(),
        }
    }

    /// A store pre-loaded with the GSI fixture records.
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::load(&store);
        store
    }

    // ---- users ----

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.users.find(|u| u.email == email)
    }

    /// `input.password` must already be hashed by the caller.
    pub fn create_user(&self, input: CreateUser) -> User {
        let now = Utc::now();
        let user = User {
            id: new_id(),
            email: input.email,
            password: input.password,
            first_name: input.first_name,
            last_name: input.last_name,
            role: input.role.unwrap_or(UserRole::User),
            permissions: input.permissions.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id.clone(), user)
    }

    pub fn update_user(&self, id: &str, patch: UpdateUser) -> Option<User> {
        self.users.update_with(id, |user| {
            patch.apply(user);
            user.updated_at = Utc::now();
        })
    }

    // ---- employees ----

    pub fn create_employee(&self, input: CreateEmployee) -> Employee {
        let now = Utc::now();
        let employee = Employee {
            id: new_id(),
            employee_id: input.employee_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            position: input.position,
            department: input.department,
            hire_date: input.hire_date,
            salary: input.salary,
            status: input.status.unwrap_or(EmployeeStatus::Active),
            manager_id: input.manager_id,
            created_at: now,
            updated_at: now,
        };
        self.employees.insert(employee.id.clone(), employee)
    }

    pub fn update_employee(&self, id: &str, patch: UpdateEmployee) -> Option<Employee> {
        self.employees.update_with(id, |emp| {
            patch.apply(emp);
            emp.updated_at = Utc::now();
        })
    }

    pub fn delete_employee(&self, id: &str) -> bool {
        self.employees.remove(id)
    }

    // ---- projects ----

    pub fn create_project(&self, input: CreateProject) -> Project {
        let now = Utc::now();
        let project = Project {
            id: new_id(),
            name: input.name,
            description: input.description,
            client: input.client,
            status: input.status.unwrap_or(ProjectStatus::Active),
            start_date: input.start_date,
            end_date: input.end_date,
            budget: input.budget,
            progress: input.progress.unwrap_or(0),
            manager_id: input.manager_id,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(project.id.clone(), project)
    }

    pub fn update_project(&self, id: &str, patch: UpdateProject) -> Option<Project> {
        self.projects.update_with(id, |project| {
            patch.apply(project);
            project.updated_at = Utc::now();
        })
    }

    pub fn delete_project(&self, id: &str) -> bool {
        self.projects.remove(id)
    }

    // ---- tasks ----

    pub fn tasks_by_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .filter(|t| t.project_id.as_deref() == Some(project_id))
    }

    pub fn tasks_by_assignee(&self, assignee_id: &str) -> Vec<Task> {
        self.tasks
            .filter(|t| t.assignee_id.as_deref() == Some(assignee_id))
    }

    pub fn create_task(&self, input: CreateTask) -> Task {
        let now = Utc::now();
        let task = Task {
            id: new_id(),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or(TaskStatus::Pending),
            priority: input.priority.unwrap_or(TaskPriority::Medium),
            assignee_id: input.assignee_id,
            project_id: input.project_id,
            due_date: input.due_date,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(task.id.clone(), task)
    }

    /// The store does not infer `completedAt` from a status change; the
    /// facade passes it explicitly when transitioning to `completed`.
    pub fn update_task(&self, id: &str, patch: UpdateTask) -> Option<Task> {
        self.tasks.update_with(id, |task| {
            patch.apply(task);
            task.updated_at = Utc::now();
        })
    }

    pub fn delete_task(&self, id: &str) -> bool {
        self.tasks.remove(id)
    }

    // ---- kpis ----

    pub fn create_kpi(&self, input: CreateKpi) -> Kpi {
        let now = Utc::now();
        let kpi = Kpi {
            id: new_id(),
            name: input.name,
            description: input.description,
            category: input.category,
            target_value: input.target_value,
            current_value: input.current_value,
            unit: input.unit,
            period: input.period,
            created_at: now,
            updated_at: now,
        };
        self.kpis.insert(kpi.id.clone(), kpi)
    }

    pub fn update_kpi(&self, id: &str, patch: UpdateKpi) -> Option<Kpi> {
        self.kpis.update_with(id, |kpi| {
            patch.apply(kpi);
            kpi.updated_at = Utc::now();
        })
    }

    pub fn delete_kpi(&self, id: &str) -> bool {
        self.kpis.remove(id)
    }

    // ---- transactions ----

    pub fn create_transaction(&self, input: CreateTransaction) -> Transaction {
        let tx = Transaction {
            id: new_id(),
            kind: input.kind,
            amount: input.amount,
            description: input.description,
            category: input.category,
            project_id: input.project_id,
            date: input.date,
            created_by: input.created_by,
            created_at: Utc::now(),
        };
        self.transactions.insert(tx.id.clone(), tx)
    }

    pub fn update_transaction(&self, id: &str, patch: UpdateTransaction) -> Option<Transaction> {
        self.transactions.update_with(id, |tx| patch.apply(tx))
    }

    pub fn delete_transaction(&self, id: &str) -> bool {
        self.transactions.remove(id)
    }

    // ---- payroll ----

    pub fn payroll_by_employee(&self, employee_id: &str) -> Vec<PayrollRecord> {
        self.payroll.filter(|r| r.employee_id == employee_id)
    }

    /// `netPay` is derived here, once, from the three money fields.
    pub fn create_payroll(&self, input: CreatePayroll) -> PayrollRecord {
        let allowances = input.allowances.unwrap_or(0.0);
        let deductions = input.deductions.unwrap_or(0.0);
        let record = PayrollRecord {
            id: new_id(),
            employee_id: input.employee_id,
            period: input.period,
            base_salary: input.base_salary,
            allowances,
            deductions,
            net_pay: input.base_salary + allowances - deductions,
            status: input.status.unwrap_or(PayrollStatus::Pending),
            approved_by: input.approved_by,
            approved_at: None,
            created_at: Utc::now(),
        };
        self.payroll.insert(record.id.clone(), record)
    }

    /// Never recomputes `netPay`. Stamps `approvedAt` the first time the
    /// patch introduces a non-null `approvedBy`; an existing stamp is kept.
    pub fn update_payroll(&self, id: &str, patch: UpdatePayroll) -> Option<PayrollRecord> {
        self.payroll.update_with(id, |record| {
            let approving = patch.approved_by.is_some() && record.approved_at.is_none();
            patch.apply(record);
            if approving {
                record.approved_at = Some(Utc::now());
            }
        })
    }

    // ---- proposals ----

    pub fn create_proposal(&self, input: CreateProposal) -> Proposal {
        let now = Utc::now();
        let proposal = Proposal {
            id: new_id(),
            title: input.title,
            client: input.client,
            description: input.description,
            value: input.value,
            status: input.status.unwrap_or(ProposalStatus::Draft),
            submission_date: input.submission_date,
            deadline_date: input.deadline_date,
            lead_id: input.lead_id,
            created_at: now,
            updated_at: now,
        };
        self.proposals.insert(proposal.id.clone(), proposal)
    }

    pub fn update_proposal(&self, id: &str, patch: UpdateProposal) -> Option<Proposal> {
        self.proposals.update_with(id, |proposal| {
            patch.apply(proposal);
            proposal.updated_at = Utc::now();
        })
    }

    pub fn delete_proposal(&self, id: &str) -> bool {
        self.proposals.remove(id)
    }

    // ---- evaluations ----

    pub fn evaluations_by_project(&self, project_id: &str) -> Vec<Evaluation> {
        self.evaluations.filter(|e| e.project_id == project_id)
    }

    pub fn create_evaluation(&self, input: CreateEvaluation) -> Evaluation {
        let evaluation = Evaluation {
            id: new_id(),
            project_id: input.project_id,
            evaluation_type: input.evaluation_type,
            evaluation_date: input.evaluation_date,
            findings: input.findings,
            recommendations: input.recommendations,
            score: input.score,
            evaluator_id: input.evaluator_id,
            created_at: Utc::now(),
        };
        self.evaluations.insert(evaluation.id.clone(), evaluation)
    }

    pub fn update_evaluation(&self, id: &str, patch: UpdateEvaluation) -> Option<Evaluation> {
        self.evaluations.update_with(id, |e| patch.apply(e))
    }

    // ---- reports ----

    /// Reports are materialized synchronously and complete immediately;
    /// there is no background generation queue.
    pub fn create_report(
        &self,
        name: String,
        report_type: String,
        description: Option<String>,
        created_by: Option<String>,
    ) -> Report {
        let now = Utc::now();
        let report = Report {
            id: new_id(),
            name,
            report_type,
            description,
            generated_at: now,
            status: ReportStatus::Completed,
            file_path: None,
            created_by,
            created_at: now,
        };
        self.reports.insert(report.id.clone(), report)
    }

    // ---- assets ----

    pub fn create_asset(&self, input: CreateAsset) -> Asset {
        let now = Utc::now();
        let asset = Asset {
            id: new_id(),
            name: input.name,
            description: input.description,
            category: input.category,
            serial_number: input.serial_number,
            purchase_date: input.purchase_date,
            purchase_value: input.purchase_value,
            current_value: input.current_value,
            status: input.status.unwrap_or(AssetStatus::Active),
            assigned_to: input.assigned_to,
            location: input.location,
            created_at: now,
            updated_at: now,
        };
        self.assets.insert(asset.id.clone(), asset)
    }

    pub fn update_asset(&self, id: &str, patch: UpdateAsset) -> Option<Asset> {
        self.assets.update_with(id, |asset| {
            patch.apply(asset);
            asset.updated_at = Utc::now();
        })
    }

    pub fn delete_asset(&self, id: &str) -> bool {
        self.assets.remove(id)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
