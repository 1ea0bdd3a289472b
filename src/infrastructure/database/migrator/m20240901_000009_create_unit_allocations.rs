//! Create unit_allocations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitAllocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitAllocations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnitAllocations::ResultId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UnitAllocations::Unit).integer().not_null())
                    .col(
                        ColumnDef::new(UnitAllocations::DeltaLiters)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnitAllocations::Price)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnitAllocations::Debt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnitAllocations::TotalPayable)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_allocations_result")
                    .table(UnitAllocations::Table)
                    .col(UnitAllocations::ResultId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitAllocations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UnitAllocations {
    Table,
    Id,
    ResultId,
    Unit,
    DeltaLiters,
    Price,
    Debt,
    TotalPayable,
}
