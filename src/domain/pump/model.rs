//! Pump domain entity

use chrono::{DateTime, Utc};

use crate::domain::fuel::FuelType;

/// A fuel-dispensing unit. Belongs to exactly one station and dispenses a
/// single fuel grade. `pump_number` is unique within its station.
#[derive(Debug, Clone, PartialEq)]
pub struct Pump {
    pub id: i32,
    pub pump_number: String,
    pub fuel_type: FuelType,
    pub station_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
