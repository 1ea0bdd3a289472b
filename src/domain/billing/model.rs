//! Billing domain entities: bills, extra charges, debts
//!
//! All amounts are integers in the billing currency's major unit (Toman).

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

/// Metered water bill for a building and billing period.
///
/// Invariant: `total_payment > consumption_price > 0`. The difference is
/// the tax component, shared equally across units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterBill {
    pub id: i32,
    pub building_id: i32,
    /// Full amount billed by the utility
    pub total_payment: i64,
    /// Metered-cost component, excluding tax
    pub consumption_price: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl WaterBill {
    /// Tax component: total minus the metered consumption cost.
    pub fn tax(&self) -> i64 {
        self.total_payment - self.consumption_price
    }
}

/// Gas bill for a building: one total, no tax split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasBill {
    pub id: i32,
    pub building_id: i32,
    pub total_payment: i64,
    pub created_at: DateTime<Utc>,
}

/// Ad-hoc charge line attached to a water bill, applied identically to
/// every unit (the amount is already per-unit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraCharge {
    pub id: i32,
    pub water_bill_id: i32,
    pub title: String,
    pub amount: i64,
    /// Display order within the bill
    pub position: i32,
}

/// Per-unit carried-over balances for a building.
///
/// Units absent from the ledger owe nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtLedger {
    entries: BTreeMap<i32, i64>,
}

impl DebtLedger {
    pub fn amount_for(&self, unit: i32) -> i64 {
        self.entries.get(&unit).copied().unwrap_or(0)
    }

    pub fn entries(&self) -> &BTreeMap<i32, i64> {
        &self.entries
    }
}

impl FromIterator<(i32, i64)> for DebtLedger {
    fn from_iter<I: IntoIterator<Item = (i32, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_bill_tax_is_total_minus_consumption() {
        let bill = WaterBill {
            id: 1,
            building_id: 1,
            total_payment: 1_227_700,
            consumption_price: 695_800,
            period_start: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2023, 2, 12).unwrap(),
            created_at: Utc::now(),
        };
        assert_eq!(bill.tax(), 531_900);
    }

    #[test]
    fn absent_units_owe_nothing() {
        let ledger: DebtLedger = [(1, 5000), (9, 97_500)].into_iter().collect();
        assert_eq!(ledger.amount_for(1), 5000);
        assert_eq!(ledger.amount_for(9), 97_500);
        assert_eq!(ledger.amount_for(2), 0);
    }
}
