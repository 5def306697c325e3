//! Staff repository interface

use async_trait::async_trait;

use super::model::StaffMember;
use crate::domain::DomainResult;

#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<StaffMember>>;
    async fn find_all(&self) -> DomainResult<Vec<StaffMember>>;
    async fn find_by_station(&self, station_id: i32) -> DomainResult<Vec<StaffMember>>;
    async fn save(&self, staff: StaffMember) -> DomainResult<StaffMember>;
    async fn update(&self, staff: StaffMember) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
