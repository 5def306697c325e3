//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::inventory::InventoryRepository;
use crate::domain::pump::PumpRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::sale::SaleRepository;
use crate::domain::staff::StaffRepository;
use crate::domain::station::StationRepository;

use super::inventory_repository::SeaOrmInventoryRepository;
use super::pump_repository::SeaOrmPumpRepository;
use super::sale_repository::SeaOrmSaleRepository;
use super::staff_repository::SeaOrmStaffRepository;
use super::station_repository::SeaOrmStationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let station = repos.stations().find_by_id(1).await?;
/// let sales = repos.sales().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    stations: SeaOrmStationRepository,
    pumps: SeaOrmPumpRepository,
    staff: SeaOrmStaffRepository,
    sales: SeaOrmSaleRepository,
    inventory: SeaOrmInventoryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            stations: SeaOrmStationRepository::new(db.clone()),
            pumps: SeaOrmPumpRepository::new(db.clone()),
            staff: SeaOrmStaffRepository::new(db.clone()),
            sales: SeaOrmSaleRepository::new(db.clone()),
            inventory: SeaOrmInventoryRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn pumps(&self) -> &dyn PumpRepository {
        &self.pumps
    }

    fn staff(&self) -> &dyn StaffRepository {
        &self.staff
    }

    fn sales(&self) -> &dyn SaleRepository {
        &self.sales
    }

    fn inventory(&self) -> &dyn InventoryRepository {
        &self.inventory
    }
}
