use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_non_empty};

/// A tracked indicator. Progress toward target is derived on demand
/// (`stats::kpi_progress`), never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: String,
    #[schema(example = "Client Satisfaction Score")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Quality")]
    pub category: String,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    #[schema(example = "%", nullable = true)]
    pub unit: Option<String>,
    #[schema(example = "2024-Q1")]
    pub period: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKpi {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub period: String,
}

impl CreateKpi {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "category", &self.category);
        require_non_empty(&mut errors, "period", &self.period);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKpi {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub period: Option<String>,
}

impl UpdateKpi {
    pub fn apply(self, kpi: &mut Kpi) {
        if let Some(v) = self.name {
            kpi.name = v;
        }
        if let Some(v) = self.description {
            kpi.description = Some(v);
        }
        if let Some(v) = self.category {
            kpi.category = v;
        }
        if let Some(v) = self.target_value {
            kpi.target_value = Some(v);
        }
        if let Some(v) = self.current_value {
            kpi.current_value = Some(v);
        }
        if let Some(v) = self.unit {
            kpi.unit = Some(v);
        }
        if let Some(v) = self.period {
            kpi.period = v;
        }
    }
}
