//! Aggregation layer: pure, read-only computations over store snapshots.
//! Nothing here is persisted; every call recomputes from the collections.

use chrono::{Datelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::employee::EmployeeStatus;
use crate::model::kpi::Kpi;
use crate::model::payroll::PayrollStatus;
use crate::model::project::ProjectStatus;
use crate::model::task::TaskStatus;
use crate::model::transaction::TransactionType;
use crate::store::Store;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[schema(example = 2)]
    pub active_projects: usize,
    #[schema(example = 4)]
    pub total_employees: usize,
    #[schema(example = 7)]
    pub pending_tasks: usize,
    /// Sum of income transactions dated in the current calendar month.
    #[schema(example = 12500.0)]
    pub monthly_revenue: f64,
}

pub fn dashboard_stats(store: &Store) -> DashboardStats {
    let now = Utc::now();

    let active_projects = store
        .projects
        .filter(|p| p.status == ProjectStatus::Active)
        .len();
    let total_employees = store
        .employees
        .filter(|e| e.status == EmployeeStatus::Active)
        .len();
    let pending_tasks = store
        .tasks
        .filter(|t| matches!(t.status, TaskStatus::Pending | TaskStatus::InProgress))
        .len();
    let monthly_revenue = store
        .transactions
        .filter(|t| {
            t.kind == TransactionType::Income
                && t.date.year() == now.year()
                && t.date.month() == now.month()
        })
        .iter()
        .map(|t| t.amount)
        .sum();

    DashboardStats {
        active_projects,
        total_employees,
        pending_tasks,
        monthly_revenue,
    }
}

/// Percent progress toward target, clamped to 0-100. A missing or zero
/// target yields 0, never a division error or infinity.
pub fn kpi_progress(kpi: &Kpi) -> f64 {
    match (kpi.current_value, kpi.target_value) {
        (Some(current), Some(target)) if target != 0.0 => {
            (current / target * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    pub pending: f64,
    pub approved: f64,
    pub paid: f64,
    pub total: f64,
}

/// Net-pay sums grouped by record status, plus a grand total.
pub fn payroll_totals(store: &Store) -> PayrollTotals {
    let mut totals = PayrollTotals {
        pending: 0.0,
        approved: 0.0,
        paid: 0.0,
        total: 0.0,
    };
    for record in store.payroll.list() {
        match record.status {
            PayrollStatus::Pending => totals.pending += record.net_pay,
            PayrollStatus::Approved => totals.approved += record.net_pay,
            PayrollStatus::Paid => totals.paid += record.net_pay,
        }
        totals.total += record.net_pay;
    }
    totals
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
}

pub fn finance_totals(store: &Store) -> FinanceTotals {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    for tx in store.transactions.list() {
        match tx.kind {
            TransactionType::Income => total_income += tx.amount,
            TransactionType::Expense => total_expenses += tx.amount,
        }
    }
    FinanceTotals {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    /// Score of the most recent evaluation by date; 0 when none exist.
    pub latest_score: i32,
    pub evaluation_count: usize,
    pub latest_date: Option<chrono::DateTime<Utc>>,
}

pub fn evaluation_summary(store: &Store, project_id: &str) -> EvaluationSummary {
    let evaluations = store.evaluations_by_project(project_id);
    let latest = evaluations
        .iter()
        .max_by_key(|e| e.evaluation_date);
    EvaluationSummary {
        latest_score: latest.and_then(|e| e.score).unwrap_or(0),
        evaluation_count: evaluations.len(),
        latest_date: latest.map(|e| e.evaluation_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::CreateEmployee;
    use crate::model::evaluation::{CreateEvaluation, EvaluationType};
    use crate::model::payroll::CreatePayroll;
    use crate::model::project::CreateProject;
    use crate::model::transaction::CreateTransaction;
    use chrono::{DateTime, Duration};

    fn kpi(current: Option<f64>, target: Option<f64>) -> Kpi {
        Kpi {
            id: "kpi-1".into(),
            name: "Client Satisfaction".into(),
            description: None,
            category: "Quality".into(),
            target_value: target,
            current_value: current,
            unit: Some("%".into()),
            period: "2024-Q1".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn kpi_progress_basic_and_clamped() {
        assert_eq!(kpi_progress(&kpi(Some(50.0), Some(100.0))), 50.0);
        assert_eq!(kpi_progress(&kpi(None, Some(100.0))), 0.0);
        assert_eq!(kpi_progress(&kpi(Some(150.0), Some(100.0))), 100.0);
        assert_eq!(kpi_progress(&kpi(Some(50.0), Some(0.0))), 0.0);
        assert_eq!(kpi_progress(&kpi(Some(50.0), None)), 0.0);
    }

    fn project(store: &Store, status: crate::model::project::ProjectStatus) {
        store.create_project(CreateProject {
            name: "p".into(),
            description: None,
            client: "c".into(),
            status: Some(status),
            start_date: Utc::now(),
            end_date: None,
            budget: None,
            progress: None,
            manager_id: None,
        });
    }

    fn employee(store: &Store, status: EmployeeStatus) {
        let n = store.employees.len();
        store.create_employee(CreateEmployee {
            employee_id: format!("GSI{n:03}"),
            first_name: "E".into(),
            last_name: format!("{n}"),
            email: format!("e{n}@governancesystemsint.com"),
            phone: None,
            position: "Consultant".into(),
            department: "Consulting".into(),
            hire_date: Utc::now(),
            salary: None,
            status: Some(status),
            manager_id: None,
        });
    }

    fn income(store: &Store, amount: f64, date: DateTime<Utc>) {
        store.create_transaction(CreateTransaction {
            kind: TransactionType::Income,
            amount,
            description: "fee".into(),
            category: "Consulting".into(),
            project_id: None,
            date,
            created_by: None,
        });
    }

    #[test]
    fn dashboard_stats_counts_and_monthly_revenue() {
        let store = Store::new();
        project(&store, ProjectStatus::Active);
        project(&store, ProjectStatus::Active);
        project(&store, ProjectStatus::Completed);
        for _ in 0..4 {
            employee(&store, EmployeeStatus::Active);
        }
        employee(&store, EmployeeStatus::Inactive);
        income(&store, 1000.0, Utc::now());
        income(&store, 500.0, Utc::now() - Duration::days(45));

        let stats = dashboard_stats(&store);
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.total_employees, 4);
        assert_eq!(stats.monthly_revenue, 1000.0);
    }

    #[test]
    fn finance_totals_balance() {
        let store = Store::new();
        income(&store, 1000.0, Utc::now());
        store.create_transaction(CreateTransaction {
            kind: TransactionType::Expense,
            amount: 400.0,
            description: "fuel".into(),
            category: "Transport".into(),
            project_id: None,
            date: Utc::now(),
            created_by: None,
        });

        let totals = finance_totals(&store);
        assert_eq!(totals.total_income, 1000.0);
        assert_eq!(totals.total_expenses, 400.0);
        assert_eq!(totals.net_balance, 600.0);
    }

    #[test]
    fn payroll_totals_group_by_status() {
        let store = Store::new();
        for (status, base) in [
            (PayrollStatus::Pending, 1000.0),
            (PayrollStatus::Approved, 2000.0),
            (PayrollStatus::Paid, 3000.0),
            (PayrollStatus::Paid, 500.0),
        ] {
            store.create_payroll(CreatePayroll {
                employee_id: "emp-1".into(),
                period: "2024-03".into(),
                base_salary: base,
                allowances: None,
                deductions: None,
                status: Some(status),
                approved_by: None,
            });
        }
        let totals = payroll_totals(&store);
        assert_eq!(totals.pending, 1000.0);
        assert_eq!(totals.approved, 2000.0);
        assert_eq!(totals.paid, 3500.0);
        assert_eq!(totals.total, 6500.0);
    }

    #[test]
    fn evaluation_summary_picks_latest_by_date() {
        let store = Store::new();
        let early = Utc::now() - Duration::days(30);
        let late = Utc::now();
        for (date, score) in [(early, 40), (late, 78)] {
            store.create_evaluation(CreateEvaluation {
                project_id: "proj-1".into(),
                evaluation_type: EvaluationType::Midterm,
                evaluation_date: date,
                findings: None,
                recommendations: None,
                score: Some(score),
                evaluator_id: None,
            });
        }

        let summary = evaluation_summary(&store, "proj-1");
        assert_eq!(summary.latest_score, 78);
        assert_eq!(summary.evaluation_count, 2);

        let empty = evaluation_summary(&store, "proj-9");
        assert_eq!(empty.latest_score, 0);
        assert_eq!(empty.evaluation_count, 0);
    }
}
