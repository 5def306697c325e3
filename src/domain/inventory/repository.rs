//! Fuel inventory repository interface

use async_trait::async_trait;

use super::model::FuelInventory;
use crate::domain::DomainResult;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<FuelInventory>>;
    async fn find_all(&self) -> DomainResult<Vec<FuelInventory>>;
    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<FuelInventory>>;
    async fn save(&self, inventory: FuelInventory) -> DomainResult<FuelInventory>;
    async fn update(&self, inventory: FuelInventory) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
