//! Millidegree to Celsius conversion with decimal rounding
//!
//! The driver hands us an integer number of millidegrees, so rounding happens
//! on that integer before the single division by 1000. Rounding the float
//! instead would turn `66.665` into `66.66` because `66.665 * 100` is
//! `6666.499999...` in binary.

use crate::constants::temperature::{MILLIDEGREE_DECIMALS, MILLIDEGREE_DIVISOR};

/// Convert millidegrees to degrees Celsius, rounded to `precision` decimal places.
///
/// * `None` - no rounding
/// * `Some(0)` - whole degrees
/// * `Some(-1)` - tens of degrees, `Some(-2)` hundreds, and so on
///
/// Halves round away from zero.
pub fn round_millidegrees(millis: i64, precision: Option<i32>) -> f64 {
    let precision = match precision {
        Some(p) if p < MILLIDEGREE_DECIMALS => p,
        _ => return millis as f64 / MILLIDEGREE_DIVISOR,
    };

    let exponent = i64::from(MILLIDEGREE_DECIMALS) - i64::from(precision);
    let Some(unit) = u32::try_from(exponent)
        .ok()
        .and_then(|exponent| 10i64.checked_pow(exponent))
    else {
        // Coarser than any i64 millidegree value can reach
        return 0.0;
    };

    let quotient = millis / unit;
    let remainder = millis % unit;
    let rounded = if remainder.abs() >= unit - remainder.abs() {
        quotient + millis.signum()
    } else {
        quotient
    };

    match rounded.checked_mul(unit) {
        Some(rounded_millis) => rounded_millis as f64 / MILLIDEGREE_DIVISOR,
        None => rounded as f64 * unit as f64 / MILLIDEGREE_DIVISOR,
    }
}
