//! Create unit_readings table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnitReadings::SnapshotId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UnitReadings::Unit).integer().not_null())
                    .col(
                        ColumnDef::new(UnitReadings::Liters)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One reading per unit within a snapshot
        manager
            .create_index(
                Index::create()
                    .name("idx_unit_readings_snapshot_unit")
                    .table(UnitReadings::Table)
                    .col(UnitReadings::SnapshotId)
                    .col(UnitReadings::Unit)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitReadings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UnitReadings {
    Table,
    Id,
    SnapshotId,
    Unit,
    Liters,
}
