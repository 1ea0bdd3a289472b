//! Create water_bills table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaterBills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WaterBills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WaterBills::BuildingId).integer().not_null())
                    .col(
                        ColumnDef::new(WaterBills::TotalPayment)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WaterBills::ConsumptionPrice)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WaterBills::PeriodStart).date().not_null())
                    .col(ColumnDef::new(WaterBills::PeriodEnd).date().not_null())
                    .col(
                        ColumnDef::new(WaterBills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_water_bills_building")
                    .table(WaterBills::Table)
                    .col(WaterBills::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaterBills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum WaterBills {
    Table,
    Id,
    BuildingId,
    TotalPayment,
    ConsumptionPrice,
    PeriodStart,
    PeriodEnd,
    CreatedAt,
}
