//! Gas bill entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gas bill model - one building-wide total, no tax split
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gas_bills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub building_id: i32,

    /// Full amount billed (in Toman)
    pub total_payment: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
