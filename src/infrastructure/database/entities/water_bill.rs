//! Water bill entity

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Water bill model - the utility's metered bill for one period
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "water_bills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub building_id: i32,

    /// Full amount billed (in Toman)
    pub total_payment: i64,

    /// Metered consumption component, excluding tax (in Toman)
    pub consumption_price: i64,

    pub period_start: NaiveDate,

    pub period_end: NaiveDate,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
