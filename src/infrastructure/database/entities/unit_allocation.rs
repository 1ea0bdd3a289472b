//! Unit allocation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit allocation model - final payable figures for one unit in one run
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "unit_allocations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Parent allocation result
    pub result_id: i32,

    pub unit: i32,

    /// Usage delta over the snapshot window, in liters
    pub delta_liters: i64,

    /// Reconciled water price (in Toman)
    pub price: i64,

    /// Carried-over debt (in Toman)
    pub debt: i64,

    /// price + shared_extra + debt (in Toman)
    pub total_payable: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
