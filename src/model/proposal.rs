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
pub enum ProposalStatus {
    Draft,
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    #[schema(example = "AfDB Water Infrastructure Proposal")]
    pub title: String,
    #[schema(example = "African Development Bank")]
    pub client: String,
    pub description: Option<String>,
    #[schema(example = 450000.0, nullable = true)]
    pub value: Option<f64>,
    pub status: ProposalStatus,
    pub submission_date: Option<DateTime<Utc>>,
    pub deadline_date: Option<DateTime<Utc>>,
    /// Employee leading the bid; weak reference.
    pub lead_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposal {
    pub title: String,
    pub client: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub status: Option<ProposalStatus>,
    pub submission_date: Option<DateTime<Utc>>,
    pub deadline_date: Option<DateTime<Utc>>,
    pub lead_id: Option<String>,
}

impl CreateProposal {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "client", &self.client);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposal {
    pub title: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub status: Option<ProposalStatus>,
    pub submission_date: Option<DateTime<Utc>>,
    pub deadline_date: Option<DateTime<Utc>>,
    pub lead_id: Option<String>,
}

impl UpdateProposal {
    pub fn apply(self, proposal: &mut Proposal) {
        if let Some(v) = self.title {
            proposal.title = v;
        }
        if let Some(v) = self.client {
            proposal.client = v;
        }
        if let Some(v) = self.description {
            proposal.description = Some(v);
        }
        if let Some(v) = self.value {
            proposal.value = Some(v);
        }
        if let Some(v) = self.status {
            proposal.status = v;
        }
        if let Some(v) = self.submission_date {
            proposal.submission_date = Some(v);
        }
        if let Some(v) = self.deadline_date {
            proposal.deadline_date = Some(v);
        }
        if let Some(v) = self.lead_id {
            proposal.lead_id = Some(v);
        }
    }
}
