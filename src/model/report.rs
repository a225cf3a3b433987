use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_non_empty};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Completed,
    Failed,
}

/// A generated report descriptor. Materialized synchronously on request
/// and immutable afterward; artifact bytes are produced on download from
/// this descriptor, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[schema(example = "Financial Summary Report")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "financial-summary")]
    pub report_type: String,
    pub description: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub file_path: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    /// Type tag, e.g. "financial-summary" or "employee-performance".
    #[serde(rename = "type")]
    #[schema(example = "financial-summary")]
    pub report_type: String,
    pub description: Option<String>,
    pub created_by: Option<String>,
}

impl CreateReport {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "type", &self.report_type);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Display name derived from the type tag; unknown tags are title-cased.
    pub fn display_name(&self) -> String {
        match self.report_type.as_str() {
            "employee-performance" => "Employee Performance Report".to_string(),
            "financial-summary" => "Financial Summary Report".to_string(),
            "project-progress" => "Project Progress Report".to_string(),
            "task-completion" => "Task Completion Report".to_string(),
            "kpi-analysis" => "KPI Analysis Report".to_string(),
            other => {
                let words: Vec<String> = other
                    .split(['-', '_'])
                    .filter(|w| !w.is_empty())
                    .map(|w| {
                        let mut chars = w.chars();
                        match chars.next() {
                            Some(first) => first.to_uppercase().chain(chars).collect(),
                            None => String::new(),
                        }
                    })
                    .collect();
                format!("{} Report", words.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_tags_map_to_display_names() {
        let req = CreateReport {
            report_type: "financial-summary".into(),
            description: None,
            created_by: None,
        };
        assert_eq!(req.display_name(), "Financial Summary Report");
    }

    #[test]
    fn unknown_type_tags_are_title_cased() {
        let req = CreateReport {
            report_type: "asset-register".into(),
            description: None,
            created_by: None,
        };
        assert_eq!(req.display_name(), "Asset Register Report");
    }
}
