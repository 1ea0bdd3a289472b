//! Building DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Building;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildingResponse {
    pub id: i32,
    pub name: String,
    pub units: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Building> for BuildingResponse {
    fn from(b: Building) -> Self {
        Self {
            id: b.id,
            name: b.name,
            units: b.units,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBuildingRequest {
    #[validate(length(min = 1, max = 100, message = "building name is required"))]
    pub name: String,
    #[validate(range(
        min = Building::MIN_UNITS,
        message = "a building needs at least two units"
    ))]
    pub units: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_count_floor_matches_the_domain_minimum() {
        let req = CreateBuildingRequest {
            name: "G1".into(),
            units: Building::MIN_UNITS - 1,
        };
        assert!(req.validate().is_err());

        let req = CreateBuildingRequest {
            name: "G1".into(),
            units: Building::MIN_UNITS,
        };
        assert!(req.validate().is_ok());
    }
}
