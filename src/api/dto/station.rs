//! Station DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Station;

/// A petrol station.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Harbor Road Service Station",
    "location": "Mombasa",
    "address": "12 Harbor Road",
    "phone": "+254 700 000001",
    "manager_name": "Grace Wanjiru",
    "is_active": true,
    "created_at": "2025-06-01T08:00:00Z",
    "updated_at": "2025-06-01T08:00:00Z"
}))]
pub struct StationDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Station> for StationDto {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
            address: s.address,
            phone: s.phone,
            manager_name: s.manager_name,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Create-station request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub location: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
}

/// Update-station request (partial update — send only changed fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStationRequest {
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub location: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
}
