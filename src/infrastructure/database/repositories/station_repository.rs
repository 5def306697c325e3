//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::station::{Station, StationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::station;

use super::db_err;

fn entity_to_domain(m: station::Model) -> Station {
    Station {
        id: m.id,
        name: m.name,
        location: m.location,
        address: m.address,
        phone: m.phone,
        manager_name: m.manager_name,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Station>> {
        let model = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .filter(station::Column::IsActive.eq(true))
            .order_by_asc(station::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, s: Station) -> DomainResult<Station> {
        let now = Utc::now();
        let model = station::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(s.name),
            location: Set(s.location),
            address: Set(s.address),
            phone: Set(s.phone),
            manager_name: Set(s.manager_name),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Station saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, s: Station) -> DomainResult<()> {
        let existing = station::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Station", "id", s.id));
        };

        let model = station::ActiveModel {
            id: Set(s.id),
            name: Set(s.name),
            location: Set(s.location),
            address: Set(s.address),
            phone: Set(s.phone),
            manager_name: Set(s.manager_name),
            is_active: Set(s.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn deactivate(&self, id: i32) -> DomainResult<()> {
        let existing = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Station", "id", id));
        };

        let mut model: station::ActiveModel = existing.into();
        model.is_active = Set(false);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;

        info!("Station {} deactivated", id);
        Ok(())
    }
}
