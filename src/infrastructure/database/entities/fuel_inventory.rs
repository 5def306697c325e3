//! Fuel inventory entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fuel_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub station_id: i32,

    /// Fuel grade: Regular, Premium, Diesel, Petrol, Kerosene
    pub fuel_type: String,

    #[sea_orm(column_type = "Double")]
    pub capacity_litres: f64,

    #[sea_orm(column_type = "Double")]
    pub current_level_litres: f64,

    #[sea_orm(column_type = "Double")]
    pub minimum_threshold_litres: f64,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
