//! Structural validation of an allocation run
//!
//! Fails fast before any arithmetic starts. All checks run and every
//! violation is reported together, tagged with the snapshot it concerns.

use crate::domain::{AllocationRun, UsageSnapshot, ValidationError, Violation};

pub struct ConsistencyGuard;

impl ConsistencyGuard {
    pub fn check(run: &AllocationRun) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        Self::check_snapshot(run, &run.previous, "previous_snapshot", &mut violations);
        Self::check_snapshot(run, &run.current, "current_snapshot", &mut violations);

        if run.previous.taken_on >= run.current.taken_on {
            violations.push(Violation {
                field: "previous_snapshot",
                message: format!(
                    "taken on {} which is not strictly before the current snapshot of {}",
                    run.previous.taken_on, run.current.taken_on
                ),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    fn check_snapshot(
        run: &AllocationRun,
        snapshot: &UsageSnapshot,
        field: &'static str,
        violations: &mut Vec<Violation>,
    ) {
        let expected = run.building.units as usize;
        if snapshot.reading_count() != expected {
            violations.push(Violation {
                field,
                message: format!(
                    "expected {} unit readings, found {}",
                    expected,
                    snapshot.reading_count()
                ),
            });
        } else {
            let mut units: Vec<i32> = snapshot.readings.iter().map(|r| r.unit).collect();
            units.sort_unstable();
            if units != run.building.unit_numbers().collect::<Vec<_>>() {
                violations.push(Violation {
                    field,
                    message: format!(
                        "readings must cover units 1..={} exactly",
                        run.building.units
                    ),
                });
            }
        }

        if snapshot.building_id != run.water_bill.building_id {
            violations.push(Violation {
                field,
                message: format!(
                    "belongs to building {} but the water bill belongs to building {}",
                    snapshot.building_id, run.water_bill.building_id
                ),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::domain::{Building, DebtLedger, UnitReading, WaterBill};

    fn building(units: i32) -> Building {
        Building {
            id: 1,
            name: "G1".into(),
            units,
            created_at: Utc::now(),
        }
    }

    fn snapshot(id: i32, building_id: i32, day: u32, units: i32) -> UsageSnapshot {
        UsageSnapshot {
            id,
            building_id,
            taken_on: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            readings: (1..=units)
                .map(|unit| UnitReading {
                    unit,
                    liters: 1000 * unit as i64,
                })
                .collect(),
        }
    }

    fn water_bill(building_id: i32) -> WaterBill {
        WaterBill {
            id: 1,
            building_id,
            total_payment: 100_000,
            consumption_price: 80_000,
            period_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn valid_run() -> AllocationRun {
        AllocationRun {
            building: building(4),
            water_bill: water_bill(1),
            gas_bill: None,
            previous: snapshot(10, 1, 1, 4),
            current: snapshot(11, 1, 31, 4),
            extra_charges: vec![],
            debts: DebtLedger::default(),
        }
    }

    #[test]
    fn accepts_a_consistent_run() {
        assert!(ConsistencyGuard::check(&valid_run()).is_ok());
    }

    #[test]
    fn rejects_mismatched_reading_count() {
        let mut run = valid_run();
        run.previous.readings.pop();

        let err = ConsistencyGuard::check(&run).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "previous_snapshot");
        assert!(err.violations[0].message.contains("expected 4"));
        assert!(err.violations[0].message.contains("found 3"));
    }

    #[test]
    fn rejects_renumbered_units() {
        let mut run = valid_run();
        // Right count, but unit 2 was renumbered to 9
        run.current.readings[1].unit = 9;

        let err = ConsistencyGuard::check(&run).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "current_snapshot");
        assert!(err.violations[0].message.contains("1..=4"));
    }

    #[test]
    fn rejects_cross_building_snapshot() {
        let mut run = valid_run();
        run.current.building_id = 2;

        let err = ConsistencyGuard::check(&run).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "current_snapshot");
        assert!(err.violations[0].message.contains("building 2"));
    }

    #[test]
    fn rejects_non_increasing_dates() {
        let mut run = valid_run();
        run.current.taken_on = run.previous.taken_on;

        let err = ConsistencyGuard::check(&run).unwrap_err();
        assert_eq!(err.violations[0].field, "previous_snapshot");
        assert!(err.violations[0].message.contains("strictly before"));
    }

    #[test]
    fn reports_all_violations_together() {
        let mut run = valid_run();
        run.previous.readings.pop();
        run.previous.building_id = 3;
        run.current.taken_on = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();

        let err = ConsistencyGuard::check(&run).unwrap_err();
        assert_eq!(err.violations.len(), 3);
    }
}
