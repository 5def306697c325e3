//! Fuel inventory DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::FuelInventory;
use crate::domain::FuelType;

/// Tank inventory for one fuel grade at one station.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 5,
    "station_id": 1,
    "fuel_type": "Petrol",
    "capacity_litres": 20000.0,
    "current_level_litres": 3500.0,
    "minimum_threshold_litres": 4000.0,
    "stock_percentage": 17.5,
    "is_low_stock": true,
    "updated_at": "2025-06-10T14:30:00Z"
}))]
pub struct InventoryDto {
    pub id: i32,
    pub station_id: i32,
    pub fuel_type: FuelType,
    pub capacity_litres: Decimal,
    pub current_level_litres: Decimal,
    pub minimum_threshold_litres: Decimal,
    /// Fill level as a percentage of capacity (one decimal place)
    pub stock_percentage: Decimal,
    /// Level is below the minimum threshold
    pub is_low_stock: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<FuelInventory> for InventoryDto {
    fn from(inv: FuelInventory) -> Self {
        let stock_percentage = inv.stock_percentage();
        let is_low_stock = inv.is_low_stock();
        Self {
            id: inv.id,
            station_id: inv.station_id,
            fuel_type: inv.fuel_type,
            capacity_litres: inv.capacity_litres,
            current_level_litres: inv.current_level_litres,
            minimum_threshold_litres: inv.minimum_threshold_litres,
            stock_percentage,
            is_low_stock,
            updated_at: inv.updated_at,
        }
    }
}

/// Create-inventory request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryRequest {
    pub station_id: i32,
    pub fuel_type: String,
    pub capacity_litres: Decimal,
    pub current_level_litres: Decimal,
    pub minimum_threshold_litres: Decimal,
}

/// Update-inventory request (partial update — send only changed fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    pub capacity_litres: Option<Decimal>,
    pub current_level_litres: Option<Decimal>,
    pub minimum_threshold_litres: Option<Decimal>,
}
