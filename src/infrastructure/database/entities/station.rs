//! Station entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub location: String,

    #[sea_orm(nullable)]
    pub address: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub manager_name: Option<String>,

    /// Soft-delete flag; DELETE deactivates instead of removing the row
    pub is_active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pump::Entity")]
    Pump,

    #[sea_orm(has_many = "super::staff::Entity")]
    Staff,

    #[sea_orm(has_many = "super::fuel_inventory::Entity")]
    FuelInventory,
}

impl Related<super::pump::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pump.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::fuel_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
