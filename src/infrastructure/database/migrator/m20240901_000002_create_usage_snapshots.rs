//! Create usage_snapshots table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsageSnapshots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsageSnapshots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsageSnapshots::BuildingId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UsageSnapshots::TakenOn).date().not_null())
                    .col(
                        ColumnDef::new(UsageSnapshots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsageSnapshots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usage_snapshots_building")
                    .table(UsageSnapshots::Table)
                    .col(UsageSnapshots::BuildingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsageSnapshots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UsageSnapshots {
    Table,
    Id,
    BuildingId,
    TakenOn,
    CreatedAt,
    UpdatedAt,
}
