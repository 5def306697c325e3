//! Create pumps table

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
                    .table(Pumps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pumps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pumps::PumpNumber).string().not_null())
                    .col(ColumnDef::new(Pumps::FuelType).string().not_null())
                    .col(ColumnDef::new(Pumps::StationId).integer().not_null())
                    .col(
                        ColumnDef::new(Pumps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pumps::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pumps_station")
                            .from(Pumps::Table, Pumps::StationId)
                            .to(Stations::Table, Stations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // pump_number is unique within one station
        manager
            .create_index(
                Index::create()
                    .name("idx_pumps_station_number")
                    .table(Pumps::Table)
                    .col(Pumps::StationId)
                    .col(Pumps::PumpNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pumps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pumps {
    Table,
    Id,
    PumpNumber,
    FuelType,
    StationId,
    CreatedAt,
    UpdatedAt,
}
