//! Station repository interface

use async_trait::async_trait;

use super::model::Station;
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Station>>;
    /// Active stations only, ordered by name.
    async fn find_all_active(&self) -> DomainResult<Vec<Station>>;
    async fn save(&self, station: Station) -> DomainResult<Station>;
    async fn update(&self, station: Station) -> DomainResult<()>;
    /// Soft delete: marks the station inactive, keeps the row.
    async fn deactivate(&self, id: i32) -> DomainResult<()>;
}
