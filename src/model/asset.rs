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
pub enum AssetStatus {
    Active,
    Maintenance,
    Retired,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[schema(example = "Toyota Land Cruiser")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Vehicles")]
    pub category: String,
    /// Unique by convention, not enforced.
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: AssetStatus,
    /// Employee the asset is issued to; weak reference.
    pub assigned_to: Option<String>,
    #[schema(example = "Kampala Office", nullable = true)]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: Option<AssetStatus>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
}

impl CreateAsset {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "category", &self.category);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: Option<AssetStatus>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
}

impl UpdateAsset {
    pub fn apply(self, asset: &mut Asset) {
        if let Some(v) = self.name {
            asset.name = v;
        }
        if let Some(v) = self.description {
            asset.description = Some(v);
        }
        if let Some(v) = self.category {
            asset.category = v;
        }
        if let Some(v) = self.serial_number {
            asset.serial_number = Some(v);
        }
        if let Some(v) = self.purchase_date {
            asset.purchase_date = Some(v);
        }
        if let Some(v) = self.purchase_value {
            asset.purchase_value = Some(v);
        }
        if let Some(v) = self.current_value {
            asset.current_value = Some(v);
        }
        if let Some(v) = self.status {
            asset.status = v;
        }
        if let Some(v) = self.assigned_to {
            asset.assigned_to = Some(v);
        }
        if let Some(v) = self.location {
            asset.location = Some(v);
        }
    }
}
