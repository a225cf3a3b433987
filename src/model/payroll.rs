use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_non_empty, require_positive};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PayrollStatus {
    Pending,
    Approved,
    Paid,
}

/// One pay period for one employee. `netPay` is fixed at creation
/// (base + allowances - deductions); edits to the money fields do not
/// recompute it unless the caller supplies a new value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: String,
    pub employee_id: String,
    /// Pay period, YYYY-MM.
    #[schema(example = "2024-03")]
    pub period: String,
    #[schema(example = 50000.0)]
    pub base_salary: f64,
    #[schema(example = 5000.0)]
    pub allowances: f64,
    #[schema(example = 2000.0)]
    pub deductions: f64,
    #[schema(example = 53000.0)]
    pub net_pay: f64,
    pub status: PayrollStatus,
    pub approved_by: Option<String>,
    /// Stamped once, the first time `approvedBy` becomes non-null.
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayroll {
    pub employee_id: String,
    #[schema(example = "2024-03")]
    pub period: String,
    pub base_salary: f64,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
    pub status: Option<PayrollStatus>,
    pub approved_by: Option<String>,
}

impl CreatePayroll {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "employeeId", &self.employee_id);
        require_non_empty(&mut errors, "period", &self.period);
        require_positive(&mut errors, "baseSalary", self.base_salary);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayroll {
    pub employee_id: Option<String>,
    pub period: Option<String>,
    pub base_salary: Option<f64>,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
    /// Accepted as-is; the store never derives it on update.
    pub net_pay: Option<f64>,
    pub status: Option<PayrollStatus>,
    pub approved_by: Option<String>,
}

impl UpdatePayroll {
    pub fn apply(self, record: &mut PayrollRecord) {
        if let Some(v) = self.employee_id {
            record.employee_id = v;
        }
        if let Some(v) = self.period {
            record.period = v;
        }
        if let Some(v) = self.base_salary {
            record.base_salary = v;
        }
        if let Some(v) = self.allowances {
            record.allowances = v;
        }
        if let Some(v) = self.deductions {
            record.deductions = v;
        }
        if let Some(v) = self.net_pay {
            record.net_pay = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = self.approved_by {
            record.approved_by = Some(v);
        }
    }
}
