//! Debt ledger entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt model - carried-over balance of one unit, unique per (building, unit)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub building_id: i32,

    pub unit: i32,

    /// Owed amount (in Toman), positive
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
