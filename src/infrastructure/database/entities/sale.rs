//! Sale entity
//!
//! Money and volume columns are stored as REAL; the repository layer
//! converts to `rust_decimal::Decimal` at the domain boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub pump_id: i32,

    /// Fuel grade: Regular, Premium, Diesel, Petrol, Kerosene
    pub fuel_type: String,

    #[sea_orm(column_type = "Double")]
    pub litres: f64,

    #[sea_orm(column_type = "Double")]
    pub price_per_litre: f64,

    /// Derived: litres × price_per_litre, rounded to 2 decimal places
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,

    pub sale_timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pump::Entity",
        from = "Column::PumpId",
        to = "super::pump::Column::Id"
    )]
    Pump,
}

impl Related<super::pump::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pump.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
