use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::validation::{FieldError, require_non_empty, require_positive};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A finance ledger entry. No `updatedAt`: transactions are append-mostly
/// and the original schema carries only a creation stamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[schema(example = 1000.0)]
    pub amount: f64,
    #[schema(example = "Consulting fee - USAID activity")]
    pub description: String,
    #[schema(example = "Consulting")]
    pub category: String,
    pub project_id: Option<String>,
    pub date: DateTime<Utc>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub project_id: Option<String>,
    pub date: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl CreateTransaction {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_positive(&mut errors, "amount", self.amount);
        require_non_empty(&mut errors, "description", &self.description);
        require_non_empty(&mut errors, "category", &self.category);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransaction {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub project_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}

impl UpdateTransaction {
    pub fn apply(self, tx: &mut Transaction) {
        if let Some(v) = self.kind {
            tx.kind = v;
        }
        if let Some(v) = self.amount {
            tx.amount = v;
        }
        if let Some(v) = self.description {
            tx.description = v;
        }
        if let Some(v) = self.category {
            tx.category = v;
        }
        if let Some(v) = self.project_id {
            tx.project_id = Some(v);
        }
        if let Some(v) = self.date {
            tx.date = v;
        }
        if let Some(v) = self.created_by {
            tx.created_by = Some(v);
        }
    }
}
