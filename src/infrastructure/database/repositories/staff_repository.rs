//! SeaORM implementation of StaffRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::domain::staff::{StaffMember, StaffRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::staff;

use super::db_err;

fn entity_to_domain(m: staff::Model) -> StaffMember {
    StaffMember {
        id: m.id,
        name: m.name,
        role: m.role,
        station_id: m.station_id,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub struct SeaOrmStaffRepository {
    db: DatabaseConnection,
}

impl SeaOrmStaffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for SeaOrmStaffRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<StaffMember>> {
        let model = staff::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<StaffMember>> {
        let models = staff::Entity::find()
            .order_by_asc(staff::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<StaffMember>> {
        let models = staff::Entity::find()
            .filter(staff::Column::StationId.eq(station_id))
            .order_by_asc(staff::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, s: StaffMember) -> DomainResult<StaffMember> {
        let now = Utc::now();
        let model = staff::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(s.name),
            role: Set(s.role),
            station_id: Set(s.station_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Staff saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, s: StaffMember) -> DomainResult<()> {
        let existing = staff::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Staff", "id", s.id));
        };

        let model = staff::ActiveModel {
            id: Set(s.id),
            name: Set(s.name),
            role: Set(s.role),
            station_id: Set(s.station_id),
            is_active: Set(s.is_active),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = staff::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Staff", "id", id));
        }
        Ok(())
    }
}
