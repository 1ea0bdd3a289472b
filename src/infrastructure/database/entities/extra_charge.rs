//! Extra charge entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Extra charge model - an ad-hoc per-unit charge line on a water bill
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extra_charges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub water_bill_id: i32,

    /// Charge title (e.g., "cleaning", "elevator service")
    pub title: String,

    /// Per-unit amount (in Toman)
    pub amount: i64,

    /// Display order within the bill
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
