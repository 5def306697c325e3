//! Create fuel_inventory table

use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_stations::Stations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuelInventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelInventory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FuelInventory::StationId).integer().not_null())
                    .col(ColumnDef::new(FuelInventory::FuelType).string().not_null())
                    .col(
                        ColumnDef::new(FuelInventory::CapacityLitres)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FuelInventory::CurrentLevelLitres)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FuelInventory::MinimumThresholdLitres)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FuelInventory::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fuel_inventory_station")
                            .from(FuelInventory::Table, FuelInventory::StationId)
                            .to(Stations::Table, Stations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One tank per fuel grade per station
        manager
            .create_index(
                Index::create()
                    .name("idx_fuel_inventory_station_fuel")
                    .table(FuelInventory::Table)
                    .col(FuelInventory::StationId)
                    .col(FuelInventory::FuelType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FuelInventory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FuelInventory {
    Table,
    Id,
    StationId,
    FuelType,
    CapacityLitres,
    CurrentLevelLitres,
    MinimumThresholdLitres,
    UpdatedAt,
}
