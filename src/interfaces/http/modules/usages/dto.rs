//! Usage snapshot DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::usage::{UnitReading, UsageSnapshot};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReadingDto {
    /// Unit number within the building
    #[validate(range(min = 1, message = "unit number must be positive"))]
    pub unit: i32,
    /// Cumulative meter reading in liters
    #[validate(range(min = 1, message = "liters must be positive"))]
    pub liters: i64,
}

impl From<UnitReading> for ReadingDto {
    fn from(r: UnitReading) -> Self {
        Self {
            unit: r.unit,
            liters: r.liters,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SnapshotResponse {
    pub id: i32,
    pub building_id: i32,
    pub taken_on: NaiveDate,
    pub readings: Vec<ReadingDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UsageSnapshot> for SnapshotResponse {
    fn from(s: UsageSnapshot) -> Self {
        Self {
            id: s.id,
            building_id: s.building_id,
            taken_on: s.taken_on,
            readings: s.readings.into_iter().map(Into::into).collect(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSnapshotRequest {
    /// Date the readings were taken
    pub taken_on: NaiveDate,
    /// One reading per unit
    #[validate(
        length(min = 2, message = "at least two unit readings are required"),
        nested
    )]
    pub readings: Vec<ReadingDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(readings: Vec<ReadingDto>) -> CreateSnapshotRequest {
        CreateSnapshotRequest {
            taken_on: NaiveDate::from_ymd_opt(2023, 2, 12).unwrap(),
            readings,
        }
    }

    #[test]
    fn accepts_positive_readings() {
        let req = request(vec![
            ReadingDto { unit: 1, liters: 100_000 },
            ReadingDto { unit: 2, liters: 105_700 },
        ]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_negative_liters() {
        for liters in [0, -4_000] {
            let req = request(vec![
                ReadingDto { unit: 1, liters },
                ReadingDto { unit: 2, liters: 105_700 },
            ]);
            assert!(req.validate().is_err(), "liters={}", liters);
        }
    }

    #[test]
    fn rejects_non_positive_unit_numbers() {
        let req = request(vec![
            ReadingDto { unit: 0, liters: 100_000 },
            ReadingDto { unit: 2, liters: 105_700 },
        ]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_fewer_than_two_readings() {
        let req = request(vec![ReadingDto { unit: 1, liters: 100_000 }]);
        assert!(req.validate().is_err());
    }
}
