//! Sale DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{FuelType, Sale};

/// A fuel sale.
///
/// `total_amount` is always derived server-side from litres × price;
/// any total supplied on create/update is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 42,
    "pump_id": 3,
    "fuel_type": "Diesel",
    "litres": 45.5,
    "price_per_litre": 1.45,
    "total_amount": 65.98,
    "sale_timestamp": "2025-06-10T14:30:00Z",
    "station_name": "Harbor Road Service Station"
}))]
pub struct SaleDto {
    pub id: i32,
    pub pump_id: i32,
    pub fuel_type: FuelType,
    pub litres: Decimal,
    pub price_per_litre: Decimal,
    pub total_amount: Decimal,
    pub sale_timestamp: DateTime<Utc>,
    /// Resolved through the pump → station join; absent when the pump no
    /// longer resolves to a station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
}

impl From<Sale> for SaleDto {
    fn from(s: Sale) -> Self {
        Self {
            id: s.id,
            pump_id: s.pump_id,
            fuel_type: s.fuel_type,
            litres: s.litres,
            price_per_litre: s.price_per_litre,
            total_amount: s.total_amount,
            sale_timestamp: s.sale_timestamp,
            station_name: s.station_name,
        }
    }
}

/// Create-sale request.
///
/// Numeric and enumeration policies (positive litres, positive price with at
/// most 2 decimal places, recognized fuel type, existing pump) are enforced
/// by the domain layer so each violation names its field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    pub pump_id: i32,
    pub fuel_type: String,
    pub litres: Decimal,
    pub price_per_litre: Decimal,
    /// Defaults to the current time when omitted.
    pub sale_timestamp: Option<DateTime<Utc>>,
}

/// Update-sale request (partial update — send only changed fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSaleRequest {
    pub pump_id: Option<i32>,
    pub fuel_type: Option<String>,
    pub litres: Option<Decimal>,
    pub price_per_litre: Option<Decimal>,
    pub sale_timestamp: Option<DateTime<Utc>>,
}
