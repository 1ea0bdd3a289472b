//! Allocation result (audit record) entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Allocation result model - audit record of one allocation run.
///
/// The intermediate per-unit vectors are stored as JSON text so the full
/// computation stays reconstructible from a single row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "allocation_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub building_id: i32,

    pub water_bill_id: i32,

    pub gas_bill_id: Option<i32>,

    pub previous_snapshot_id: i32,

    pub current_snapshot_id: i32,

    /// Reconciliation ratio applied to the raw prices
    pub ratio: f64,

    /// Per-unit-equal share of tax, gas and extra charges (in Toman)
    pub shared_extra: i64,

    /// JSON array of per-unit usage deltas in liters
    #[sea_orm(column_type = "Text")]
    pub deltas: String,

    /// JSON array of per-unit raw tariff prices
    #[sea_orm(column_type = "Text")]
    pub raw_prices: String,

    /// JSON array of per-unit reconciled prices
    #[sea_orm(column_type = "Text")]
    pub reconciled_prices: String,

    /// JSON map of unit number to owed amount at run time
    #[sea_orm(column_type = "Text")]
    pub debts: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
