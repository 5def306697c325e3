//! Repository traits for the domain layer

use super::inventory::InventoryRepository;
use super::pump::PumpRepository;
use super::sale::SaleRepository;
use super::staff::StaffRepository;
use super::station::StationRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let station = repos.stations().find_by_id(1).await?;
///     let pumps = repos.pumps().find_by_station(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn stations(&self) -> &dyn StationRepository;
    fn pumps(&self) -> &dyn PumpRepository;
    fn staff(&self) -> &dyn StaffRepository;
    fn sales(&self) -> &dyn SaleRepository;
    fn inventory(&self) -> &dyn InventoryRepository;
}
