//! Create extra_charges table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExtraCharges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExtraCharges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExtraCharges::WaterBillId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExtraCharges::Title).string().not_null())
                    .col(
                        ColumnDef::new(ExtraCharges::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExtraCharges::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_extra_charges_water_bill")
                    .table(ExtraCharges::Table)
                    .col(ExtraCharges::WaterBillId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExtraCharges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ExtraCharges {
    Table,
    Id,
    WaterBillId,
    Title,
    Amount,
    Position,
}
