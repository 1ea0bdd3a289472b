//! Stepped water tariff
//!
//! Eight volume bands, each a distinct linear function of the cubic-meter
//! volume. The coefficients are fixed domain constants from the utility's
//! published tariff table, calibrated for a 30-day billing cycle.

/// One tariff band: left-open, right-closed volume interval in m³ with a
/// linear price formula `v * slope - intercept`.
struct TariffBand {
    upper_m3: f64,
    slope: f64,
    intercept: f64,
}

/// Bands in ascending volume order; the top band is unbounded.
const BANDS: [TariffBand; 8] = [
    TariffBand { upper_m3: 5.0, slope: 2824.0, intercept: 0.0 },
    TariffBand { upper_m3: 10.0, slope: 4229.0, intercept: 7025.0 },
    TariffBand { upper_m3: 14.0, slope: 5630.0, intercept: 21035.0 },
    TariffBand { upper_m3: 21.0, slope: 16811.0, intercept: 177569.0 },
    TariffBand { upper_m3: 28.0, slope: 25217.0, intercept: 354085.0 },
    TariffBand { upper_m3: 42.0, slope: 50433.0, intercept: 1060147.0 },
    TariffBand { upper_m3: 56.0, slope: 100866.0, intercept: 3178333.0 },
    TariffBand { upper_m3: f64::INFINITY, slope: 168110.0, intercept: 6943997.0 },
];

/// Raw price for a usage volume given in liters.
///
/// Undefined for non-positive volume: returns `None`, never a default
/// number. Callers must treat `None` as a precondition violation.
pub fn tariff_price(volume_liters: f64) -> Option<f64> {
    if volume_liters <= 0.0 {
        return None;
    }

    let v = volume_liters / 1000.0;
    for band in &BANDS {
        if v <= band.upper_m3 {
            return Some(v * band.slope - band.intercept);
        }
    }
    // Top band upper bound is infinite
    unreachable!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_match_the_tariff_table() {
        // (liters, expected price), one group per band from the utility table
        let to_test = [
            (1.0, 0.001 * 2824.0),
            (356.0, 0.356 * 2824.0),
            (499.0, 0.499 * 2824.0),
            (500.0, 0.5 * 2824.0),
            (10_001.0, 10.001 * 5630.0 - 21035.0),
            (12_568.0, 12.568 * 5630.0 - 21035.0),
            (14_000.0, 14.0 * 5630.0 - 21035.0),
            (43_889.0, 43.889 * 100866.0 - 3178333.0),
            (50_000.0, 50.0 * 100866.0 - 3178333.0),
            (54_201.0, 54.201 * 100866.0 - 3178333.0),
            (56_001.0, 56.001 * 168110.0 - 6943997.0),
            (73_452.0, 73.452 * 168110.0 - 6943997.0),
            (102_480.0, 102.48 * 168110.0 - 6943997.0),
        ];

        for (liters, expected) in to_test {
            let price = tariff_price(liters).unwrap();
            assert!(
                (price - expected).abs() < 1e-6,
                "tariff({}) = {}, expected {}",
                liters,
                price,
                expected
            );
        }
    }

    #[test]
    fn undefined_for_non_positive_volume() {
        assert_eq!(tariff_price(0.0), None);
        assert_eq!(tariff_price(-1.0), None);
        assert_eq!(tariff_price(-50_000.0), None);
    }

    #[test]
    fn bands_are_left_open_right_closed() {
        // 5000 liters is still the first band, 5001 liters the second
        let at_boundary = tariff_price(5000.0).unwrap();
        assert!((at_boundary - 5.0 * 2824.0).abs() < 1e-6);
        let past_boundary = tariff_price(5001.0).unwrap();
        assert!((past_boundary - (5.001 * 4229.0 - 7025.0)).abs() < 1e-6);
    }

    #[test]
    fn near_continuous_at_band_boundaries() {
        // Crossing a boundary by one liter must not jump by more than the
        // upper band's per-liter marginal price, plus slack for the table's
        // own rounding of intercepts.
        let boundaries_m3 = [5.0, 10.0, 14.0, 21.0, 28.0, 42.0, 56.0];
        for upper in boundaries_m3 {
            let below = tariff_price(upper * 1000.0).unwrap();
            let above = tariff_price(upper * 1000.0 + 1.0).unwrap();
            let marginal = 168110.0 / 1000.0;
            assert!(
                (above - below).abs() <= marginal + 1.0,
                "discontinuity at {} m3: {} -> {}",
                upper,
                below,
                above
            );
        }
    }
}
