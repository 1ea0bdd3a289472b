//! Create allocation_results table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllocationResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AllocationResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AllocationResults::BuildingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AllocationResults::WaterBillId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AllocationResults::GasBillId).integer())
                    .col(
                        ColumnDef::new(AllocationResults::PreviousSnapshotId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AllocationResults::CurrentSnapshotId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AllocationResults::Ratio).double().not_null())
                    .col(
                        ColumnDef::new(AllocationResults::SharedExtra)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AllocationResults::Deltas).text().not_null())
                    .col(
                        ColumnDef::new(AllocationResults::RawPrices)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AllocationResults::ReconciledPrices)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AllocationResults::Debts).text().not_null())
                    .col(
                        ColumnDef::new(AllocationResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_allocation_results_building")
                    .table(AllocationResults::Table)
                    .col(AllocationResults::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AllocationResults::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AllocationResults {
    Table,
    Id,
    BuildingId,
    WaterBillId,
    GasBillId,
    PreviousSnapshotId,
    CurrentSnapshotId,
    Ratio,
    SharedExtra,
    Deltas,
    RawPrices,
    ReconciledPrices,
    Debts,
    CreatedAt,
}
