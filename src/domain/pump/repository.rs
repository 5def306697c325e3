//! Pump repository interface

use async_trait::async_trait;

use super::model::Pump;
use crate::domain::DomainResult;

#[async_trait]
pub trait PumpRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pump>>;
    async fn find_all(&self) -> DomainResult<Vec<Pump>>;
    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<Pump>>;
    /// Fails with `Conflict` when `pump_number` is already taken within the
    /// target station.
    async fn save(&self, pump: Pump) -> DomainResult<Pump>;
    async fn update(&self, pump: Pump) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
