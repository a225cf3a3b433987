use crate::api::evaluation::EvaluationQuery;
use crate::api::payroll::PayrollQuery;
use crate::api::report::DownloadQuery;
use crate::api::task::TaskQuery;
use crate::auth::handlers::LoginRequest;
use crate::model::asset::{Asset, CreateAsset, UpdateAsset};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::model::evaluation::{CreateEvaluation, Evaluation, UpdateEvaluation};
use crate::model::kpi::{CreateKpi, Kpi, UpdateKpi};
use crate::model::payroll::{CreatePayroll, PayrollRecord, UpdatePayroll};
use crate::model::project::{CreateProject, Project, UpdateProject};
use crate::model::proposal::{CreateProposal, Proposal, UpdateProposal};
use crate::model::report::{CreateReport, Report};
use crate::model::task::{CreateTask, Task, UpdateTask};
use crate::model::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use crate::model::user::{CreateUser, UpdateUser, User};
use crate::stats::{DashboardStats, EvaluationSummary, FinanceTotals, PayrollTotals};
use crate::validation::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GSI Management API",
        version = "1.0.0",
        description = r#"
## GSI Management System

Backend for the GSI management dashboard. Covers the day-to-day records of
the organization and the aggregates the dashboard is built from.

### 🔹 Key Features
- **Employees, Projects, Tasks**
  - Full CRUD with project and assignee filters on tasks
- **Finance**
  - Income/expense transactions with running totals
- **Payroll**
  - Net pay derived at creation, one-shot approval stamping
- **Reports**
  - Generated summaries with view and download endpoints
- **KPIs, Proposals, Evaluations, Assets, Users**

### 📦 Response Format
- JSON-based RESTful responses
- Validation failures return `{ message, errors: [{ field, message }] }`

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::register,

        crate::api::dashboard::dashboard_stats,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::project::list_projects,
        crate::api::project::get_project,
        crate::api::project::create_project,
        crate::api::project::update_project,
        crate::api::project::delete_project,
        crate::api::project::project_evaluation_summary,

        crate::api::task::list_tasks,
        crate::api::task::get_task,
        crate::api::task::create_task,
        crate::api::task::update_task,
        crate::api::task::delete_task,

        crate::api::kpi::list_kpis,
        crate::api::kpi::get_kpi,
        crate::api::kpi::create_kpi,
        crate::api::kpi::update_kpi,
        crate::api::kpi::delete_kpi,

        crate::api::transaction::list_transactions,
        crate::api::transaction::get_transaction,
        crate::api::transaction::create_transaction,
        crate::api::transaction::update_transaction,
        crate::api::transaction::delete_transaction,
        crate::api::transaction::finance_totals,

        crate::api::payroll::list_payroll,
        crate::api::payroll::get_payroll,
        crate::api::payroll::create_payroll,
        crate::api::payroll::update_payroll,
        crate::api::payroll::payroll_totals,

        crate::api::proposal::list_proposals,
        crate::api::proposal::get_proposal,
        crate::api::proposal::create_proposal,
        crate::api::proposal::update_proposal,
        crate::api::proposal::delete_proposal,

        crate::api::evaluation::list_evaluations,
        crate::api::evaluation::get_evaluation,
        crate::api::evaluation::create_evaluation,
        crate::api::evaluation::update_evaluation,

        crate::api::asset::list_assets,
        crate::api::asset::get_asset,
        crate::api::asset::create_asset,
        crate::api::asset::update_asset,
        crate::api::asset::delete_asset,

        crate::api::user::list_users,
        crate::api::user::get_user,
        crate::api::user::create_user,
        crate::api::user::update_user,

        crate::api::report::list_reports,
        crate::api::report::get_report,
        crate::api::report::create_report,
        crate::api::report::view_report,
        crate::api::report::download_report,
    ),
    components(
        schemas(
            LoginRequest,
            FieldError,
            Employee,
            CreateEmployee,
            UpdateEmployee,
            Project,
            CreateProject,
            UpdateProject,
            Task,
            CreateTask,
            UpdateTask,
            Kpi,
            CreateKpi,
            UpdateKpi,
            Transaction,
            CreateTransaction,
            UpdateTransaction,
            PayrollRecord,
            CreatePayroll,
            UpdatePayroll,
            Proposal,
            CreateProposal,
            UpdateProposal,
            Evaluation,
            CreateEvaluation,
            UpdateEvaluation,
            Asset,
            CreateAsset,
            UpdateAsset,
            User,
            CreateUser,
            UpdateUser,
            Report,
            CreateReport,
            DashboardStats,
            PayrollTotals,
            FinanceTotals,
            EvaluationSummary,
            TaskQuery,
            PayrollQuery,
            EvaluationQuery,
            DownloadQuery
        )
    ),
    tags(
        (name = "Auth", description = "Login and registration"),
        (name = "Dashboard", description = "Aggregated dashboard numbers"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Project", description = "Project management APIs"),
        (name = "Task", description = "Task management APIs"),
        (name = "KPI", description = "Key performance indicator APIs"),
        (name = "Finance", description = "Transaction and finance totals APIs"),
        (name = "Payroll", description = "Payroll management APIs"),
        (name = "Proposal", description = "Proposal management APIs"),
        (name = "Evaluation", description = "Project evaluation APIs"),
        (name = "Asset", description = "Asset register APIs"),
        (name = "User", description = "Account management APIs"),
        (name = "Report", description = "Report generation and download APIs"),
    )
)]
pub struct ApiDoc;
