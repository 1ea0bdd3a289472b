//! Allocation run and result entities

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::billing::{DebtLedger, ExtraCharge, GasBill, WaterBill};
use crate::domain::building::Building;
use crate::domain::usage::UsageSnapshot;

/// Fully loaded inputs for one allocation run.
///
/// Assembled by the allocation service from stored records, validated by
/// the consistency guard, consumed read-only by the engine.
#[derive(Debug, Clone)]
pub struct AllocationRun {
    pub building: Building,
    pub water_bill: WaterBill,
    pub gas_bill: Option<GasBill>,
    pub previous: UsageSnapshot,
    pub current: UsageSnapshot,
    pub extra_charges: Vec<ExtraCharge>,
    pub debts: DebtLedger,
}

/// Final figures for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitAllocation {
    pub unit: i32,
    /// Water consumed over the snapshot window, in liters
    pub delta_liters: i64,
    /// Reconciled water price for this unit
    pub price: i64,
    /// Carried-over balance from the debt ledger
    pub debt: i64,
    /// `price + shared_extra + debt`
    pub total_payable: i64,
}

/// Output of the allocation engine before persistence.
///
/// The vectors run over units in ascending unit-number order and are kept
/// for the audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedAllocation {
    /// Per-unit usage deltas in liters
    pub deltas: Vec<i64>,
    /// Per-unit tariff-table prices before reconciliation
    pub raw_prices: Vec<i64>,
    /// Scalar that maps raw prices onto the metered bill total
    pub ratio: f64,
    /// Per-unit prices after reconciliation and rounding
    pub reconciled_prices: Vec<i64>,
    /// Per-unit-equal share of tax, gas and extra charges
    pub shared_extra: i64,
    /// Debt ledger snapshot used for this run
    pub debts: BTreeMap<i32, i64>,
    pub units: Vec<UnitAllocation>,
}

/// Persisted audit record of one allocation run.
///
/// Immutable once created. Each re-run of the same inputs produces a new,
/// independent record; superseding old ones is caller policy.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    pub id: i32,
    pub building_id: i32,
    pub water_bill_id: i32,
    pub gas_bill_id: Option<i32>,
    pub previous_snapshot_id: i32,
    pub current_snapshot_id: i32,
    pub deltas: Vec<i64>,
    pub raw_prices: Vec<i64>,
    pub ratio: f64,
    pub reconciled_prices: Vec<i64>,
    pub shared_extra: i64,
    pub debts: BTreeMap<i32, i64>,
    pub units: Vec<UnitAllocation>,
    pub created_at: DateTime<Utc>,
}

impl AllocationResult {
    /// Assemble the audit record for a computed run, ready to persist.
    pub fn from_computed(run: &AllocationRun, computed: ComputedAllocation) -> Self {
        Self {
            id: 0,
            building_id: run.building.id,
            water_bill_id: run.water_bill.id,
            gas_bill_id: run.gas_bill.as_ref().map(|g| g.id),
            previous_snapshot_id: run.previous.id,
            current_snapshot_id: run.current.id,
            deltas: computed.deltas,
            raw_prices: computed.raw_prices,
            ratio: computed.ratio,
            reconciled_prices: computed.reconciled_prices,
            shared_extra: computed.shared_extra,
            debts: computed.debts,
            units: computed.units,
            created_at: Utc::now(),
        }
    }
}
