/// Largest number of decimals the estimator tries before giving up.
pub const MAX_PRECISION: i32 = 3;

/// Distance above the floor still treated as round-off.
pub const PRECISION_TOLERANCE: f64 = 0.00005;

/// Smallest number of decimals (0..=3) that represents `value` within tolerance,
/// or `-1` when more decimals would be needed.
///
/// Each scale is compared against its floor, so the remainder is what sits
/// above the truncated value: `8.00003` is `0`, while `7.99998` and binary
/// representations just under a boundary (`4.35 * 100`) need another digit.
pub fn estimate_precision(value: f64) -> i32 {
    if !value.is_finite() {
        return -1;
    }
    if distance_to_floor(value) < PRECISION_TOLERANCE {
        return 0;
    }
    let mut factor = 1.0_f64;
    for precision in 1..=MAX_PRECISION {
        factor *= 10.0;
        if distance_to_floor(value * factor) < PRECISION_TOLERANCE {
            return precision;
        }
    }
    -1
}

fn distance_to_floor(value: f64) -> f64 {
    (value.floor() - value).abs()
}
