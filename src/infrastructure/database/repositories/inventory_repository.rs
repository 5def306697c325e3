//! SeaORM implementation of InventoryRepository

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::domain::inventory::{FuelInventory, InventoryRepository};
use crate::domain::fuel::FuelType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::fuel_inventory;

use super::db_err;

fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or_default()
}

fn entity_to_domain(m: fuel_inventory::Model) -> DomainResult<FuelInventory> {
    Ok(FuelInventory {
        id: m.id,
        station_id: m.station_id,
        fuel_type: FuelType::parse(&m.fuel_type)?,
        capacity_litres: to_decimal(m.capacity_litres),
        current_level_litres: to_decimal(m.current_level_litres),
        minimum_threshold_litres: to_decimal(m.minimum_threshold_litres),
        updated_at: m.updated_at,
    })
}

pub struct SeaOrmInventoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<FuelInventory>> {
        let model = fuel_inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<FuelInventory>> {
        let models = fuel_inventory::Entity::find()
            .order_by_asc(fuel_inventory::Column::StationId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<FuelInventory>> {
        let models = fuel_inventory::Entity::find()
            .filter(fuel_inventory::Column::StationId.eq(station_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save(&self, inv: FuelInventory) -> DomainResult<FuelInventory> {
        let duplicate = fuel_inventory::Entity::find()
            .filter(fuel_inventory::Column::StationId.eq(inv.station_id))
            .filter(fuel_inventory::Column::FuelType.eq(inv.fuel_type.to_string()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if duplicate.is_some() {
            return Err(DomainError::Conflict(format!(
                "{} inventory at station {}",
                inv.fuel_type, inv.station_id
            )));
        }

        let model = fuel_inventory::ActiveModel {
            id: ActiveValue::NotSet,
            station_id: Set(inv.station_id),
            fuel_type: Set(inv.fuel_type.to_string()),
            capacity_litres: Set(inv.capacity_litres.to_f64().unwrap_or_default()),
            current_level_litres: Set(inv.current_level_litres.to_f64().unwrap_or_default()),
            minimum_threshold_litres: Set(inv.minimum_threshold_litres.to_f64().unwrap_or_default()),
            updated_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Inventory saved: {} at station {} ({})",
            result.fuel_type, result.station_id, result.id
        );
        entity_to_domain(result)
    }

    async fn update(&self, inv: FuelInventory) -> DomainResult<()> {
        let existing = fuel_inventory::Entity::find_by_id(inv.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("FuelInventory", "id", inv.id));
        }

        let model = fuel_inventory::ActiveModel {
            id: Set(inv.id),
            station_id: Set(inv.station_id),
            fuel_type: Set(inv.fuel_type.to_string()),
            capacity_litres: Set(inv.capacity_litres.to_f64().unwrap_or_default()),
            current_level_litres: Set(inv.current_level_litres.to_f64().unwrap_or_default()),
            minimum_threshold_litres: Set(inv.minimum_threshold_litres.to_f64().unwrap_or_default()),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = fuel_inventory::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("FuelInventory", "id", id));
        }
        Ok(())
    }
}
