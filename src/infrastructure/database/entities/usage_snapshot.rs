//! Usage snapshot entity

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Usage snapshot model - all submeter readings of a building on one date
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usage_snapshots")]
pub struct Model {
    /// Unique snapshot ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Building the readings belong to
    pub building_id: i32,

    /// Date the readings were taken
    pub taken_on: NaiveDate,

    /// When the snapshot was created
    pub created_at: DateTime<Utc>,

    /// When the snapshot was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
