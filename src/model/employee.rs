use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_email, require_non_empty};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "emp-1",
        "employeeId": "GSI001",
        "firstName": "Jane",
        "lastName": "Smith",
        "email": "jane.smith@governancesystemsint.com",
        "phone": "+256757578580",
        "position": "Project Manager",
        "department": "Operations",
        "hireDate": "2023-01-15T00:00:00Z",
        "salary": 75000.0,
        "status": "active",
        "managerId": null
    })
)]
pub struct Employee {
    pub id: String,

    /// Business code, e.g. "GSI001". Unique by convention, not enforced.
    #[schema(example = "GSI001")]
    pub employee_id: String,

    #[schema(example = "Jane")]
    pub first_name: String,

    #[schema(example = "Smith")]
    pub last_name: String,

    #[schema(example = "jane.smith@governancesystemsint.com")]
    pub email: String,

    #[schema(example = "+256757578580", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = "Project Manager")]
    pub position: String,

    #[schema(example = "Operations")]
    pub department: String,

    pub hire_date: DateTime<Utc>,

    #[schema(example = 75000.0, nullable = true)]
    pub salary: Option<f64>,

    #[schema(example = "active")]
    pub status: EmployeeStatus,

    /// Weak reference to another employee; may dangle after deletes.
    pub manager_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[schema(example = "GSI003")]
    pub employee_id: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@governancesystemsint.com", format = "email")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Consultant")]
    pub position: String,
    #[schema(example = "Consulting")]
    pub department: String,
    pub hire_date: DateTime<Utc>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
    pub manager_id: Option<String>,
}

impl CreateEmployee {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "employeeId", &self.employee_id);
        require_non_empty(&mut errors, "firstName", &self.first_name);
        require_non_empty(&mut errors, "lastName", &self.last_name);
        require_email(&mut errors, "email", &self.email);
        require_non_empty(&mut errors, "position", &self.position);
        require_non_empty(&mut errors, "department", &self.department);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<DateTime<Utc>>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
    pub manager_id: Option<String>,
}

impl UpdateEmployee {
    pub fn apply(self, emp: &mut Employee) {
        if let Some(v) = self.employee_id {
            emp.employee_id = v;
        }
        if let Some(v) = self.first_name {
            emp.first_name = v;
        }
        if let Some(v) = self.last_name {
            emp.last_name = v;
        }
        if let Some(v) = self.email {
            emp.email = v;
        }
        if let Some(v) = self.phone {
            emp.phone = Some(v);
        }
        if let Some(v) = self.position {
            emp.position = v;
        }
        if let Some(v) = self.department {
            emp.department = v;
        }
        if let Some(v) = self.hire_date {
            emp.hire_date = v;
        }
        if let Some(v) = self.salary {
            emp.salary = Some(v);
        }
        if let Some(v) = self.status {
            emp.status = v;
        }
        if let Some(v) = self.manager_id {
            emp.manager_id = Some(v);
        }
    }
}
