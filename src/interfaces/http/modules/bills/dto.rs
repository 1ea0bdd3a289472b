//! Bill and debt DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::billing::{ExtraCharge, GasBill, WaterBill};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtraChargeDto {
    #[validate(length(min = 1, max = 100, message = "charge title is required"))]
    pub title: String,
    /// Per-unit amount in Toman
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,
}

impl From<ExtraCharge> for ExtraChargeDto {
    fn from(c: ExtraCharge) -> Self {
        Self {
            title: c.title,
            amount: c.amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WaterBillResponse {
    pub id: i32,
    pub building_id: i32,
    pub total_payment: i64,
    pub consumption_price: i64,
    /// Tax component: total minus consumption
    pub tax: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub extra_charges: Vec<ExtraChargeDto>,
    pub created_at: DateTime<Utc>,
}

impl WaterBillResponse {
    pub fn from_bill(bill: WaterBill, extra_charges: Vec<ExtraCharge>) -> Self {
        let tax = bill.tax();
        Self {
            id: bill.id,
            building_id: bill.building_id,
            total_payment: bill.total_payment,
            consumption_price: bill.consumption_price,
            tax,
            period_start: bill.period_start,
            period_end: bill.period_end,
            extra_charges: extra_charges.into_iter().map(Into::into).collect(),
            created_at: bill.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWaterBillRequest {
    #[validate(range(min = 1, message = "total_payment must be positive"))]
    pub total_payment: i64,
    #[validate(range(min = 1, message = "consumption_price must be positive"))]
    pub consumption_price: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    #[validate(nested)]
    pub extra_charges: Vec<ExtraChargeDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GasBillResponse {
    pub id: i32,
    pub building_id: i32,
    pub total_payment: i64,
    pub created_at: DateTime<Utc>,
}

impl From<GasBill> for GasBillResponse {
    fn from(g: GasBill) -> Self {
        Self {
            id: g.id,
            building_id: g.building_id,
            total_payment: g.total_payment,
            created_at: g.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGasBillRequest {
    #[validate(range(min = 1, message = "total_payment must be positive"))]
    pub total_payment: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DebtEntryDto {
    pub unit: i32,
    pub amount: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetDebtRequest {
    #[validate(range(min = 1, message = "unit number must be positive"))]
    pub unit: i32,
    /// Carried-over balance; 0 clears the entry
    #[validate(range(min = 0, message = "amount must be non-negative"))]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_bill_request(extra_charges: Vec<ExtraChargeDto>) -> CreateWaterBillRequest {
        CreateWaterBillRequest {
            total_payment: 1_227_700,
            consumption_price: 695_800,
            period_start: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2023, 2, 12).unwrap(),
            extra_charges,
        }
    }

    #[test]
    fn accepts_positive_extra_charges() {
        let req = water_bill_request(vec![
            ExtraChargeDto {
                title: "cleaning".into(),
                amount: 30_000,
            },
            ExtraChargeDto {
                title: "elevator service".into(),
                amount: 50_000,
            },
        ]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_extra_charge_amounts() {
        for amount in [0, -30_000] {
            let req = water_bill_request(vec![ExtraChargeDto {
                title: "cleaning".into(),
                amount,
            }]);
            assert!(req.validate().is_err(), "amount={}", amount);
        }
    }

    #[test]
    fn rejects_untitled_extra_charges() {
        let req = water_bill_request(vec![ExtraChargeDto {
            title: "".into(),
            amount: 30_000,
        }]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_bill_amounts() {
        let mut req = water_bill_request(vec![]);
        req.total_payment = 0;
        assert!(req.validate().is_err());
    }
}
