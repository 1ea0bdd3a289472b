//! Allocation engine
//!
//! Converts raw tariff-table prices into per-unit prices whose sum tracks
//! the building's actual metered bill, then layers shared charges and
//! debts on top. Pure and deterministic: no I/O, no shared state, safe to
//! run concurrently on independent runs.

use super::rounding::round_to_hundred;
use super::tariff::tariff_price;
use crate::domain::{AllocationRun, ComputationError, ComputedAllocation, UnitAllocation};

/// The tariff table is calibrated for a 30-day billing cycle; usage is
/// projected onto it and prices are scaled back to the real window.
const BILLING_CYCLE_DAYS: f64 = 30.0;

pub struct AllocationEngine {
    /// Jurisdiction pricing coefficient, a positive multiplier from
    /// configuration. Threaded in explicitly so runs with different
    /// coefficients stay independently testable.
    coefficient: f64,
}

impl AllocationEngine {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Compute per-unit prices and totals for a validated run.
    pub fn compute(&self, run: &AllocationRun) -> Result<ComputedAllocation, ComputationError> {
        let unit_count = run.building.units as i64;
        if unit_count <= 0 {
            return Err(ComputationError::ZeroUnitCount);
        }

        let duration_days = (run.current.taken_on - run.previous.taken_on).num_days();
        if duration_days <= 0 {
            return Err(ComputationError::NonPositiveWindow {
                days: duration_days,
            });
        }

        // Join the two snapshots by unit number, never by list position.
        let previous = run.previous.readings_by_unit();
        let current = run.current.readings_by_unit();
        for unit in previous.keys() {
            if !current.contains_key(unit) {
                return Err(ComputationError::MissingUnit {
                    snapshot: "previous",
                    unit: *unit,
                });
            }
        }
        for unit in current.keys() {
            if !previous.contains_key(unit) {
                return Err(ComputationError::MissingUnit {
                    snapshot: "current",
                    unit: *unit,
                });
            }
        }

        let mut unit_numbers = Vec::with_capacity(previous.len());
        let mut deltas = Vec::with_capacity(previous.len());
        let mut raw_prices = Vec::with_capacity(previous.len());

        for (&unit, &prev_liters) in &previous {
            let delta = current[&unit] - prev_liters;
            if delta <= 0 {
                return Err(ComputationError::NonPositiveUsage {
                    unit,
                    liters: delta,
                });
            }

            // Project the delta onto a 30-day cycle, price it, then scale
            // the price back to the real window. Divide by 10 to convert
            // the tariff's minor currency unit to the billing major unit.
            let normalized30 = delta as f64 * BILLING_CYCLE_DAYS / duration_days as f64;
            let table_price =
                tariff_price(normalized30).ok_or(ComputationError::NonPositiveUsage {
                    unit,
                    liters: delta,
                })?;
            let scaled =
                table_price * duration_days as f64 / BILLING_CYCLE_DAYS * self.coefficient / 10.0;

            unit_numbers.push(unit);
            deltas.push(delta);
            raw_prices.push(round_to_hundred(scaled.ceil() as i64));
        }

        let sum_raw: i64 = raw_prices.iter().sum();
        if sum_raw == 0 {
            return Err(ComputationError::ZeroRawSum);
        }

        // The tariff table only approximates the utility's bill; the
        // metered consumption price is authoritative.
        let ratio = run.water_bill.consumption_price as f64 / sum_raw as f64;
        let reconciled_prices: Vec<i64> = raw_prices
            .iter()
            .map(|&raw| round_to_hundred((raw as f64 * ratio).ceil() as i64))
            .collect();

        let tax_share = round_to_hundred(div_ceil(run.water_bill.tax(), unit_count));
        let extra_total: i64 = run.extra_charges.iter().map(|c| c.amount).sum();
        let gas_share = run
            .gas_bill
            .as_ref()
            .map(|gas| round_to_hundred(div_ceil(gas.total_payment, unit_count)))
            .unwrap_or(0);
        let shared_extra = tax_share + extra_total + gas_share;

        let units: Vec<UnitAllocation> = unit_numbers
            .iter()
            .enumerate()
            .map(|(i, &unit)| {
                let debt = run.debts.amount_for(unit);
                UnitAllocation {
                    unit,
                    delta_liters: deltas[i],
                    price: reconciled_prices[i],
                    debt,
                    total_payable: reconciled_prices[i] + shared_extra + debt,
                }
            })
            .collect();

        Ok(ComputedAllocation {
            deltas,
            raw_prices,
            ratio,
            reconciled_prices,
            shared_extra,
            debts: run.debts.entries().clone(),
            units,
        })
    }
}

fn div_ceil(amount: i64, divisor: i64) -> i64 {
    (amount + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::domain::{
        Building, DebtLedger, ExtraCharge, GasBill, UnitReading, UsageSnapshot, WaterBill,
    };

    fn building(units: i32) -> Building {
        Building {
            id: 1,
            name: "H2".into(),
            units,
            created_at: Utc::now(),
        }
    }

    fn snapshot(id: i32, date: NaiveDate, readings: Vec<(i32, i64)>) -> UsageSnapshot {
        UsageSnapshot {
            id,
            building_id: 1,
            taken_on: date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            readings: readings
                .into_iter()
                .map(|(unit, liters)| UnitReading { unit, liters })
                .collect(),
        }
    }

    fn water_bill(total: i64, consumption: i64) -> WaterBill {
        WaterBill {
            id: 7,
            building_id: 1,
            total_payment: total,
            consumption_price: consumption,
            period_start: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2023, 2, 12).unwrap(),
            created_at: Utc::now(),
        }
    }

    /// 16 units, 40 days apart, water 695800/1227700, gas 339300,
    /// extras 30000 + 50000, three debts.
    fn sixteen_unit_run() -> AllocationRun {
        let previous_date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let current_date = NaiveDate::from_ymd_opt(2023, 2, 12).unwrap();
        assert_eq!((current_date - previous_date).num_days(), 40);

        let previous: Vec<(i32, i64)> = (1..=16).map(|u| (u, 100_000 + u as i64)).collect();
        let current: Vec<(i32, i64)> = (1..=16)
            .map(|u| (u, 100_000 + u as i64 + 4_000 + 1_700 * u as i64))
            .collect();

        AllocationRun {
            building: building(16),
            water_bill: water_bill(1_227_700, 695_800),
            gas_bill: Some(GasBill {
                id: 3,
                building_id: 1,
                total_payment: 339_300,
                created_at: Utc::now(),
            }),
            previous: snapshot(10, previous_date, previous),
            current: snapshot(11, current_date, current),
            extra_charges: vec![
                ExtraCharge {
                    id: 1,
                    water_bill_id: 7,
                    title: "cleaning".into(),
                    amount: 30_000,
                    position: 1,
                },
                ExtraCharge {
                    id: 2,
                    water_bill_id: 7,
                    title: "elevator service".into(),
                    amount: 50_000,
                    position: 2,
                },
            ],
            debts: [(1, 5_000), (9, 97_500), (14, 246_200)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn sixteen_unit_end_to_end() {
        let engine = AllocationEngine::new(1.0);
        let result = engine.compute(&sixteen_unit_run()).unwrap();

        assert_eq!(result.units.len(), 16);
        assert_eq!(result.deltas.len(), 16);
        assert_eq!(result.raw_prices.len(), 16);
        assert_eq!(result.reconciled_prices.len(), 16);

        // tax 531900 / 16 -> ceil 33244 -> 33200
        // gas 339300 / 16 -> ceil 21207 -> 21200
        // extras 30000 + 50000
        assert_eq!(result.shared_extra, 33_200 + 30_000 + 50_000 + 21_200);

        for (i, unit) in result.units.iter().enumerate() {
            assert_eq!(unit.unit, i as i32 + 1);
            assert_eq!(unit.delta_liters, result.deltas[i]);
            assert_eq!(unit.price, result.reconciled_prices[i]);
            assert_eq!(
                unit.total_payable,
                unit.price + result.shared_extra + unit.debt
            );
        }

        assert_eq!(result.units[0].debt, 5_000);
        assert_eq!(result.units[8].debt, 97_500);
        assert_eq!(result.units[13].debt, 246_200);
        assert_eq!(result.units[1].debt, 0);
    }

    #[test]
    fn reconciled_sum_tracks_the_metered_bill() {
        let engine = AllocationEngine::new(1.0);
        let run = sixteen_unit_run();
        let result = engine.compute(&run).unwrap();

        let reconciled_sum: i64 = result.reconciled_prices.iter().sum();
        let tolerance = run.building.units as i64 * 100;
        assert!(
            (reconciled_sum - run.water_bill.consumption_price).abs() <= tolerance,
            "sum {} vs consumption price {}",
            reconciled_sum,
            run.water_bill.consumption_price
        );
    }

    #[test]
    fn raw_prices_are_reconstructible_from_the_ratio() {
        let engine = AllocationEngine::new(1.0);
        let result = engine.compute(&sixteen_unit_run()).unwrap();

        for (i, &raw) in result.raw_prices.iter().enumerate() {
            let reconciled = round_to_hundred((raw as f64 * result.ratio).ceil() as i64);
            assert_eq!(reconciled, result.reconciled_prices[i]);
        }

        let sum_raw: i64 = result.raw_prices.iter().sum();
        assert!((result.ratio - 695_800.0 / sum_raw as f64).abs() < 1e-12);
    }

    #[test]
    fn coefficient_scales_raw_prices() {
        let run = sixteen_unit_run();
        let base = AllocationEngine::new(1.0).compute(&run).unwrap();
        let scaled = AllocationEngine::new(2.0).compute(&run).unwrap();

        let base_sum: i64 = base.raw_prices.iter().sum();
        let scaled_sum: i64 = scaled.raw_prices.iter().sum();
        assert!(scaled_sum > base_sum);

        // Reconciliation pulls both back to the same metered bill.
        for rec in [&base.reconciled_prices, &scaled.reconciled_prices] {
            let sum: i64 = rec.iter().sum();
            assert!((sum - 695_800).abs() <= 16 * 100, "sum {}", sum);
        }
    }

    #[test]
    fn no_gas_bill_means_no_gas_share() {
        let mut run = sixteen_unit_run();
        run.gas_bill = None;
        let result = AllocationEngine::new(1.0).compute(&run).unwrap();
        assert_eq!(result.shared_extra, 33_200 + 30_000 + 50_000);
    }

    #[test]
    fn fails_fast_on_missing_unit() {
        let mut run = sixteen_unit_run();
        // Unit 5 present in the previous snapshot but renumbered in the
        // current one: both sides are incomplete.
        let reading = run
            .current
            .readings
            .iter_mut()
            .find(|r| r.unit == 5)
            .unwrap();
        reading.unit = 99;

        let err = AllocationEngine::new(1.0).compute(&run).unwrap_err();
        assert_eq!(
            err,
            ComputationError::MissingUnit {
                snapshot: "previous",
                unit: 5
            }
        );
    }

    #[test]
    fn rejects_negative_delta_with_the_unit_named() {
        let mut run = sixteen_unit_run();
        // Meter rollback on unit 3
        let reading = run
            .current
            .readings
            .iter_mut()
            .find(|r| r.unit == 3)
            .unwrap();
        reading.liters = 1;

        let err = AllocationEngine::new(1.0).compute(&run).unwrap_err();
        match err {
            ComputationError::NonPositiveUsage { unit, liters } => {
                assert_eq!(unit, 3);
                assert!(liters < 0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_delta() {
        let mut run = sixteen_unit_run();
        let previous_liters = run
            .previous
            .readings
            .iter()
            .find(|r| r.unit == 2)
            .unwrap()
            .liters;
        run.current
            .readings
            .iter_mut()
            .find(|r| r.unit == 2)
            .unwrap()
            .liters = previous_liters;

        let err = AllocationEngine::new(1.0).compute(&run).unwrap_err();
        assert_eq!(
            err,
            ComputationError::NonPositiveUsage {
                unit: 2,
                liters: 0
            }
        );
    }

    #[test]
    fn rejects_non_positive_window() {
        let mut run = sixteen_unit_run();
        run.current.taken_on = run.previous.taken_on;

        let err = AllocationEngine::new(1.0).compute(&run).unwrap_err();
        assert_eq!(err, ComputationError::NonPositiveWindow { days: 0 });
    }

    #[test]
    fn two_runs_on_the_same_input_agree() {
        let engine = AllocationEngine::new(1.0);
        let run = sixteen_unit_run();
        let first = engine.compute(&run).unwrap();
        let second = engine.compute(&run).unwrap();
        assert_eq!(first, second);
    }
}
