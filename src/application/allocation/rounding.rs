//! Currency rounding to the nearest hundred
//!
//! Reproduces the utility's exact digit-truncation sequence. This is not
//! round-half-to-even, and naive floating rounding disagrees with it at
//! boundary values, so the integer steps below must stay as they are.

/// Round a non-negative price to the nearest 100.
///
/// Zero stays zero; anything from 1 to 99 is lifted to the minimum
/// chargeable 100. Above that, the tens digit decides: 50 and up in the
/// sub-hundred part rounds away from zero.
pub fn round_to_hundred(price: i64) -> i64 {
    debug_assert!(price >= 0);

    if price == 0 {
        return 0;
    }
    if price <= 99 {
        return 100;
    }

    // Drop the last digit, then let the new last digit decide the hundreds.
    let p1 = price / 10;
    let hundreds = if p1 % 10 >= 5 { p1 / 10 + 1 } else { p1 / 10 };
    hundreds * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_like_the_utility() {
        let to_test = [
            (0, 0),
            (1, 100),
            (99, 100),
            (100, 100),
            (153, 200),
            (978, 1000),
            (8649, 8600),
            (8650, 8700),
            (8651, 8700),
            (9980, 10000),
            (14500, 14500),
            (14560, 14600),
            (112_120, 112_100),
            (260_800, 260_800),
        ];

        for (input, expected) in to_test {
            assert_eq!(round_to_hundred(input), expected, "round({})", input);
        }
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(round_to_hundred(150), 200);
        assert_eq!(round_to_hundred(149), 100);
        assert_eq!(round_to_hundred(8_650), 8_700);
    }

    #[test]
    fn idempotent() {
        for price in (0..200_000).step_by(37) {
            let once = round_to_hundred(price);
            assert_eq!(round_to_hundred(once), once, "round(round({}))", price);
        }
    }
}
