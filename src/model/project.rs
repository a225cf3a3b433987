use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_non_empty, require_range};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[schema(example = "Water Reservoir Development - Karamoja")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Ministry of Water and Environment")]
    pub client: String,
    pub status: ProjectStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[schema(example = 300000.0, nullable = true)]
    pub budget: Option<f64>,
    /// Percent complete, 0-100.
    #[schema(example = 62, minimum = 0, maximum = 100)]
    pub progress: i32,
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub client: String,
    pub status: Option<ProjectStatus>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub progress: Option<i32>,
    pub manager_id: Option<String>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "client", &self.client);
        if let Some(progress) = self.progress {
            require_range(&mut errors, "progress", progress, 0, 100);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: Option<f64>,
    pub progress: Option<i32>,
    pub manager_id: Option<String>,
}

impl UpdateProject {
    pub fn apply(self, project: &mut Project) {
        if let Some(v) = self.name {
            project.name = v;
        }
        if let Some(v) = self.description {
            project.description = Some(v);
        }
        if let Some(v) = self.client {
            project.client = v;
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = self.start_date {
            project.start_date = v;
        }
        if let Some(v) = self.end_date {
            project.end_date = Some(v);
        }
        if let Some(v) = self.budget {
            project.budget = Some(v);
        }
        if let Some(v) = self.progress {
            project.progress = v;
        }
        if let Some(v) = self.manager_id {
            project.manager_id = Some(v);
        }
    }
}
