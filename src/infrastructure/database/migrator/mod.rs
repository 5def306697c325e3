//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_stations;
mod m20250601_000002_create_pumps;
mod m20250601_000003_create_staff;
mod m20250601_000004_create_sales;
mod m20250601_000005_create_fuel_inventory;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_stations::Migration),
            Box::new(m20250601_000002_create_pumps::Migration),
            Box::new(m20250601_000003_create_staff::Migration),
            Box::new(m20250601_000004_create_sales::Migration),
            Box::new(m20250601_000005_create_fuel_inventory::Migration),
        ]
    }
}
