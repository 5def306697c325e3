//! SeaORM implementation of SaleRepository
//!
//! Sales are stored against a pump id only; the station name the reporting
//! engine groups on is resolved here through the pump → station join.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::fuel::FuelType;
use crate::domain::sale::{Sale, SaleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{pump, sale, station};

use super::db_err;

fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or_default()
}

fn to_db(v: Decimal) -> f64 {
    v.to_f64().unwrap_or_default()
}

fn entity_to_domain(m: sale::Model, station_name: Option<String>) -> DomainResult<Sale> {
    Ok(Sale {
        id: m.id,
        pump_id: m.pump_id,
        fuel_type: FuelType::parse(&m.fuel_type)?,
        litres: to_decimal(m.litres),
        price_per_litre: to_decimal(m.price_per_litre),
        total_amount: to_decimal(m.total_amount),
        sale_timestamp: m.sale_timestamp,
        station_name,
    })
}

pub struct SeaOrmSaleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSaleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// pump id → station name, for resolving embedded station references.
    async fn station_names_by_pump(&self) -> DomainResult<HashMap<i32, String>> {
        let pumps = pump::Entity::find().all(&self.db).await.map_err(db_err)?;
        let stations = station::Entity::find().all(&self.db).await.map_err(db_err)?;

        let station_names: HashMap<i32, String> =
            stations.into_iter().map(|s| (s.id, s.name)).collect();

        Ok(pumps
            .into_iter()
            .filter_map(|p| {
                station_names
                    .get(&p.station_id)
                    .map(|name| (p.id, name.clone()))
            })
            .collect())
    }

    fn assemble(
        &self,
        models: Vec<sale::Model>,
        names: &HashMap<i32, String>,
    ) -> DomainResult<Vec<Sale>> {
        models
            .into_iter()
            .map(|m| {
                let name = names.get(&m.pump_id).cloned();
                entity_to_domain(m, name)
            })
            .collect()
    }
}

#[async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Sale>> {
        let model = sale::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let names = self.station_names_by_pump().await?;
        let name = names.get(&model.pump_id).cloned();
        entity_to_domain(model, name).map(Some)
    }

    async fn find_all(&self) -> DomainResult<Vec<Sale>> {
        let models = sale::Entity::find()
            .order_by_desc(sale::Column::SaleTimestamp)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let names = self.station_names_by_pump().await?;
        self.assemble(models, &names)
    }

    async fn find_page(&self, page: u32, limit: u32) -> DomainResult<(Vec<Sale>, u64)> {
        let paginator = sale::Entity::find()
            .order_by_desc(sale::Column::SaleTimestamp)
            .paginate(&self.db, limit.max(1) as u64);

        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1) as u64)
            .await
            .map_err(db_err)?;

        let names = self.station_names_by_pump().await?;
        Ok((self.assemble(models, &names)?, total))
    }

    async fn find_by_pump(&self, pump_id: i32) -> DomainResult<Vec<Sale>> {
        let models = sale::Entity::find()
            .filter(sale::Column::PumpId.eq(pump_id))
            .order_by_desc(sale::Column::SaleTimestamp)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let names = self.station_names_by_pump().await?;
        self.assemble(models, &names)
    }

    async fn save(&self, s: Sale) -> DomainResult<Sale> {
        let model = sale::ActiveModel {
            id: ActiveValue::NotSet,
            pump_id: Set(s.pump_id),
            fuel_type: Set(s.fuel_type.to_string()),
            litres: Set(to_db(s.litres)),
            price_per_litre: Set(to_db(s.price_per_litre)),
            total_amount: Set(to_db(s.total_amount)),
            sale_timestamp: Set(s.sale_timestamp),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Sale saved: {} L of {} at pump {} ({})",
            result.litres, result.fuel_type, result.pump_id, result.id
        );

        let names = self.station_names_by_pump().await?;
        let name = names.get(&result.pump_id).cloned();
        entity_to_domain(result, name)
    }

    async fn update(&self, s: Sale) -> DomainResult<()> {
        let existing = sale::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Sale", "id", s.id));
        }

        let model = sale::ActiveModel {
            id: Set(s.id),
            pump_id: Set(s.pump_id),
            fuel_type: Set(s.fuel_type.to_string()),
            litres: Set(to_db(s.litres)),
            price_per_litre: Set(to_db(s.price_per_litre)),
            total_amount: Set(to_db(s.total_amount)),
            sale_timestamp: Set(s.sale_timestamp),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = sale::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Sale", "id", id));
        }
        Ok(())
    }
}
