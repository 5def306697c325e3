//! Sale repository interface

use async_trait::async_trait;

use super::model::Sale;
use crate::domain::DomainResult;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Sale>>;
    /// All sales, newest first, with station names resolved through the
    /// pump → station join.
    async fn find_all(&self) -> DomainResult<Vec<Sale>>;
    /// One page of sales, newest first. Returns `(page_items, total_count)`.
    async fn find_page(&self, page: u32, limit: u32) -> DomainResult<(Vec<Sale>, u64)>;
    async fn find_by_pump(&self, pump_id: i32) -> DomainResult<Vec<Sale>>;
    async fn save(&self, sale: Sale) -> DomainResult<Sale>;
    async fn update(&self, sale: Sale) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
