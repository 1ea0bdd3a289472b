//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_buildings;
mod m20240901_000002_create_usage_snapshots;
mod m20240901_000003_create_unit_readings;
mod m20240901_000004_create_water_bills;
mod m20240901_000005_create_extra_charges;
mod m20240901_000006_create_gas_bills;
mod m20240901_000007_create_debts;
mod m20240901_000008_create_allocation_results;
mod m20240901_000009_create_unit_allocations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_buildings::Migration),
            Box::new(m20240901_000002_create_usage_snapshots::Migration),
            Box::new(m20240901_000003_create_unit_readings::Migration),
            Box::new(m20240901_000004_create_water_bills::Migration),
            Box::new(m20240901_000005_create_extra_charges::Migration),
            Box::new(m20240901_000006_create_gas_bills::Migration),
            Box::new(m20240901_000007_create_debts::Migration),
            Box::new(m20240901_000008_create_allocation_results::Migration),
            Box::new(m20240901_000009_create_unit_allocations::Migration),
        ]
    }
}
