//! Create sales table

use sea_orm_migration::prelude::*;

use super::m20250601_000002_create_pumps::Pumps;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::PumpId).integer().not_null())
                    .col(ColumnDef::new(Sales::FuelType).string().not_null())
                    .col(ColumnDef::new(Sales::Litres).double().not_null())
                    .col(ColumnDef::new(Sales::PricePerLitre).double().not_null())
                    .col(ColumnDef::new(Sales::TotalAmount).double().not_null())
                    .col(
                        ColumnDef::new(Sales::SaleTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_pump")
                            .from(Sales::Table, Sales::PumpId)
                            .to(Pumps::Table, Pumps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings and the dashboard read newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_timestamp")
                    .table(Sales::Table)
                    .col(Sales::SaleTimestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sales_pump")
                    .table(Sales::Table)
                    .col(Sales::PumpId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sales {
    Table,
    Id,
    PumpId,
    FuelType,
    Litres,
    PricePerLitre,
    TotalAmount,
    SaleTimestamp,
}
