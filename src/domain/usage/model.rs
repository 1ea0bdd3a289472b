//! Usage snapshot domain entities

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

/// Submeter reading for one unit, in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitReading {
    /// Unit number (1..=building.units)
    pub unit: i32,
    /// Cumulative meter reading in liters, positive
    pub liters: i64,
}

/// All submeter readings of a building taken on one calendar date.
///
/// Two snapshots ("previous" and "current") are the inputs to one
/// allocation run. Snapshots are created by the admin API and are
/// read-only to the allocation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSnapshot {
    pub id: i32,
    pub building_id: i32,
    /// Date the readings were taken
    pub taken_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// One reading per unit, ordered by unit number
    pub readings: Vec<UnitReading>,
}

impl UsageSnapshot {
    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }

    /// Readings keyed by unit number, for joining two snapshots.
    pub fn readings_by_unit(&self) -> BTreeMap<i32, i64> {
        self.readings.iter().map(|r| (r.unit, r.liters)).collect()
    }
}

impl std::fmt::Display for UsageSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.taken_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_by_unit_is_keyed_and_sorted() {
        let snapshot = UsageSnapshot {
            id: 1,
            building_id: 1,
            taken_on: NaiveDate::from_ymd_opt(2023, 2, 12).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            readings: vec![
                UnitReading { unit: 3, liters: 3000 },
                UnitReading { unit: 1, liters: 1000 },
                UnitReading { unit: 2, liters: 2000 },
            ],
        };

        let by_unit = snapshot.readings_by_unit();
        assert_eq!(by_unit.len(), 3);
        assert_eq!(by_unit[&1], 1000);
        assert_eq!(by_unit.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
