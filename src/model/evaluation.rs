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
pub enum EvaluationType {
    Baseline,
    Midterm,
    Final,
}

/// Monitoring & evaluation record for a project. Append-only in practice;
/// no `updatedAt` in the schema.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub project_id: String,
    pub evaluation_type: EvaluationType,
    pub evaluation_date: DateTime<Utc>,
    pub findings: Option<String>,
    pub recommendations: Option<String>,
    /// 0-100.
    #[schema(example = 78, nullable = true)]
    pub score: Option<i32>,
    pub evaluator_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluation {
    pub project_id: String,
    pub evaluation_type: EvaluationType,
    pub evaluation_date: DateTime<Utc>,
    pub findings: Option<String>,
    pub recommendations: Option<String>,
    pub score: Option<i32>,
    pub evaluator_id: Option<String>,
}

impl CreateEvaluation {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "projectId", &self.project_id);
        if let Some(score) = self.score {
            require_range(&mut errors, "score", score, 0, 100);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvaluation {
    pub project_id: Option<String>,
    pub evaluation_type: Option<EvaluationType>,
    pub evaluation_date: Option<DateTime<Utc>>,
    pub findings: Option<String>,
    pub recommendations: Option<String>,
    pub score: Option<i32>,
    pub evaluator_id: Option<String>,
}

impl UpdateEvaluation {
    pub fn apply(self, evaluation: &mut Evaluation) {
        if let Some(v) = self.project_id {
            evaluation.project_id = v;
        }
        if let Some(v) = self.evaluation_type {
            evaluation.evaluation_type = v;
        }
        if let Some(v) = self.evaluation_date {
            evaluation.evaluation_date = v;
        }
        if let Some(v) = self.findings {
            evaluation.findings = Some(v);
        }
        if let Some(v) = self.recommendations {
            evaluation.recommendations = Some(v);
        }
        if let Some(v) = self.score {
            evaluation.score = Some(v);
        }
        if let Some(v) = self.evaluator_id {
            evaluation.evaluator_id = Some(v);
        }
    }
}
