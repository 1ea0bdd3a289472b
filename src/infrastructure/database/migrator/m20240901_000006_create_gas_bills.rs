//! Create gas_bills table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GasBills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GasBills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GasBills::BuildingId).integer().not_null())
                    .col(
                        ColumnDef::new(GasBills::TotalPayment)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GasBills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GasBills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum GasBills {
    Table,
    Id,
    BuildingId,
    TotalPayment,
    CreatedAt,
}
