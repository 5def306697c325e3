//! Pump DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{FuelType, Pump};

/// A fuel pump.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 3,
    "pump_number": "Pump 2",
    "fuel_type": "Diesel",
    "station_id": 1,
    "created_at": "2025-06-01T08:00:00Z",
    "updated_at": "2025-06-01T08:00:00Z"
}))]
pub struct PumpDto {
    pub id: i32,
    pub pump_number: String,
    pub fuel_type: FuelType,
    pub station_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pump> for PumpDto {
    fn from(p: Pump) -> Self {
        Self {
            id: p.id,
            pump_number: p.pump_number,
            fuel_type: p.fuel_type,
            station_id: p.station_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Create-pump request.
///
/// `fuel_type` must be one of `Regular`, `Premium`, `Diesel`, `Petrol`,
/// `Kerosene`; it is validated against the domain enumeration so the error
/// names the offending field instead of failing JSON parsing.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePumpRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub pump_number: String,
    pub fuel_type: String,
    pub station_id: i32,
}

/// Update-pump request (partial update — send only changed fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePumpRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub pump_number: Option<String>,
    pub fuel_type: Option<String>,
    pub station_id: Option<i32>,
}
