//! Allocation DTOs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::AllocateCommand;
use crate::domain::allocation::{AllocationResult, UnitAllocation};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RunAllocationRequest {
    #[validate(range(min = 1))]
    pub water_bill_id: i32,
    /// Optional gas bill to split across units
    pub gas_bill_id: Option<i32>,
    #[validate(range(min = 1))]
    pub previous_snapshot_id: i32,
    #[validate(range(min = 1))]
    pub current_snapshot_id: i32,
}

impl RunAllocationRequest {
    pub fn into_command(self, building_id: i32) -> AllocateCommand {
        AllocateCommand {
            building_id,
            water_bill_id: self.water_bill_id,
            gas_bill_id: self.gas_bill_id,
            previous_snapshot_id: self.previous_snapshot_id,
            current_snapshot_id: self.current_snapshot_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnitAllocationDto {
    pub unit: i32,
    pub delta_liters: i64,
    /// Reconciled water price for this unit
    pub price: i64,
    pub debt: i64,
    pub total_payable: i64,
}

impl From<UnitAllocation> for UnitAllocationDto {
    fn from(u: UnitAllocation) -> Self {
        Self {
            unit: u.unit,
            delta_liters: u.delta_liters,
            price: u.price,
            debt: u.debt,
            total_payable: u.total_payable,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AllocationResponse {
    pub id: i32,
    pub building_id: i32,
    pub water_bill_id: i32,
    pub gas_bill_id: Option<i32>,
    pub previous_snapshot_id: i32,
    pub current_snapshot_id: i32,
    /// Per-unit usage deltas in liters, audit trail
    pub deltas: Vec<i64>,
    /// Per-unit tariff-table prices before reconciliation
    pub raw_prices: Vec<i64>,
    /// Scalar that maps raw prices onto the metered bill total
    pub ratio: f64,
    pub reconciled_prices: Vec<i64>,
    /// Per-unit-equal share of tax, gas and extra charges
    pub shared_extra: i64,
    pub debts: BTreeMap<i32, i64>,
    pub units: Vec<UnitAllocationDto>,
    pub created_at: DateTime<Utc>,
}

impl From<AllocationResult> for AllocationResponse {
    fn from(r: AllocationResult) -> Self {
        Self {
            id: r.id,
            building_id: r.building_id,
            water_bill_id: r.water_bill_id,
            gas_bill_id: r.gas_bill_id,
            previous_snapshot_id: r.previous_snapshot_id,
            current_snapshot_id: r.current_snapshot_id,
            deltas: r.deltas,
            raw_prices: r.raw_prices,
            ratio: r.ratio,
            reconciled_prices: r.reconciled_prices,
            shared_extra: r.shared_extra,
            debts: r.debts,
            units: r.units.into_iter().map(Into::into).collect(),
            created_at: r.created_at,
        }
    }
}
