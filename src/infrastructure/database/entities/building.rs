//! Building entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Building model - an apartment building with submetered units
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "buildings")]
pub struct Model {
    /// Unique building ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Building name (e.g., "H2", "G1")
    pub name: String,

    /// Number of residential units (>= 2)
    pub units: i32,

    /// When the building was registered
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
