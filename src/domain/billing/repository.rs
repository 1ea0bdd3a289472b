//! Bill & debt repository interface

use async_trait::async_trait;

use super::model::{DebtLedger, ExtraCharge, GasBill, WaterBill};
use crate::domain::DomainResult;

#[async_trait]
pub trait BillingRepository: Send + Sync {
    async fn find_water_bill(&self, id: i32) -> DomainResult<Option<WaterBill>>;
    async fn find_water_bills_for_building(&self, building_id: i32)
        -> DomainResult<Vec<WaterBill>>;
    /// Persist the bill and its extra charge lines.
    async fn save_water_bill(
        &self,
        bill: WaterBill,
        extra_charges: Vec<ExtraCharge>,
    ) -> DomainResult<WaterBill>;

    async fn find_gas_bill(&self, id: i32) -> DomainResult<Option<GasBill>>;
    async fn find_gas_bills_for_building(&self, building_id: i32) -> DomainResult<Vec<GasBill>>;
    async fn save_gas_bill(&self, bill: GasBill) -> DomainResult<GasBill>;

    /// Extra charge lines of a water bill in display order.
    async fn extra_charges_for(&self, water_bill_id: i32) -> DomainResult<Vec<ExtraCharge>>;

    async fn debts_for(&self, building_id: i32) -> DomainResult<DebtLedger>;
    /// Insert or replace one ledger entry; amount 0 clears it.
    async fn set_debt(&self, building_id: i32, unit: i32, amount: i64) -> DomainResult<()>;
}
