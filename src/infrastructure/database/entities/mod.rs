//! SeaORM entities

pub mod allocation_result;
pub mod building;
pub mod debt;
pub mod extra_charge;
pub mod gas_bill;
pub mod unit_allocation;
pub mod unit_reading;
pub mod usage_snapshot;
pub mod water_bill;
