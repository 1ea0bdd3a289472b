//! Unit reading entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit reading model - one submeter value inside a snapshot
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "unit_readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Snapshot the reading belongs to
    pub snapshot_id: i32,

    /// Unit number (1..=building.units)
    pub unit: i32,

    /// Cumulative meter reading in liters
    pub liters: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
