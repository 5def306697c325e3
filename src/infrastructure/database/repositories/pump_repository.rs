//! SeaORM implementation of PumpRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::domain::fuel::FuelType;
use crate::domain::pump::{Pump, PumpRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::pump;

use super::db_err;

fn entity_to_domain(m: pump::Model) -> DomainResult<Pump> {
    Ok(Pump {
        id: m.id,
        pump_number: m.pump_number,
        fuel_type: FuelType::parse(&m.fuel_type)?,
        station_id: m.station_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

pub struct SeaOrmPumpRepository {
    db: DatabaseConnection,
}

impl SeaOrmPumpRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn pump_number_taken(
        &self,
        station_id: i32,
        pump_number: &str,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        let mut query = pump::Entity::find()
            .filter(pump::Column::StationId.eq(station_id))
            .filter(pump::Column::PumpNumber.eq(pump_number));
        if let Some(id) = exclude_id {
            query = query.filter(pump::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await.map_err(db_err)?.is_some())
    }
}

#[async_trait]
impl PumpRepository for SeaOrmPumpRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pump>> {
        let model = pump::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Pump>> {
        let models = pump::Entity::find()
            .order_by_asc(pump::Column::StationId)
            .order_by_asc(pump::Column::PumpNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<Pump>> {
        let models = pump::Entity::find()
            .filter(pump::Column::StationId.eq(station_id))
            .order_by_asc(pump::Column::PumpNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save(&self, p: Pump) -> DomainResult<Pump> {
        if self
            .pump_number_taken(p.station_id, &p.pump_number, None)
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "pump '{}' at station {}",
                p.pump_number, p.station_id
            )));
        }

        let now = Utc::now();
        let model = pump::ActiveModel {
            id: ActiveValue::NotSet,
            pump_number: Set(p.pump_number),
            fuel_type: Set(p.fuel_type.to_string()),
            station_id: Set(p.station_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Pump saved: {} at station {} ({})",
            result.pump_number, result.station_id, result.id
        );
        entity_to_domain(result)
    }

    async fn update(&self, p: Pump) -> DomainResult<()> {
        let existing = pump::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Pump", "id", p.id));
        };

        if self
            .pump_number_taken(p.station_id, &p.pump_number, Some(p.id))
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "pump '{}' at station {}",
                p.pump_number, p.station_id
            )));
        }

        let model = pump::ActiveModel {
            id: Set(p.id),
            pump_number: Set(p.pump_number),
            fuel_type: Set(p.fuel_type.to_string()),
            station_id: Set(p.station_id),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = pump::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Pump", "id", id));
        }
        Ok(())
    }
}
