//! Create debts table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Debts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Debts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Debts::BuildingId).integer().not_null())
                    .col(ColumnDef::new(Debts::Unit).integer().not_null())
                    .col(ColumnDef::new(Debts::Amount).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // One ledger entry per unit per building
        manager
            .create_index(
                Index::create()
                    .name("idx_debts_building_unit")
                    .table(Debts::Table)
                    .col(Debts::BuildingId)
                    .col(Debts::Unit)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Debts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Debts {
    Table,
    Id,
    BuildingId,
    Unit,
    Amount,
}
