//! Division by repeated approximate quotients.
//!
//! Both integer types divide the same way: estimate `remaining / divisor` with doubles,
//! walk the estimate down until `estimate * divisor` no longer exceeds `remaining`, take
//! that chunk off and go again. Each pass removes all but the bits the double could not
//! resolve, so the number of passes grows with the bit length of the quotient.

use std::cmp::Ordering;

use crate::big_num_constants::*;

/// The operations the quotient loop needs from an integer type.
pub(crate) trait ApproximateDivision: Clone + Ord {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn is_negative(&self) -> bool;

    /// Estimate `self / divisor` as `ratio * 2^scale`. Both operands are positive and
    /// `self >= divisor`.
    fn estimate_ratio(&self, divisor: &Self) -> (f64, u32);

    /// Materialize `approx * 2^scale`, where `approx` is a non-negative integral double.
    fn from_estimate(approx: f64, scale: u32) -> Self;

    fn plus(&self, other: &Self) -> Self;
    fn minus(&self, other: &Self) -> Self;
    fn times(&self, other: &Self) -> Self;
}

/// Truncating quotient of two positive values.
pub(crate) fn approximate_quotient<T: ApproximateDivision>(dividend: &T, divisor: &T) -> T {
    debug_assert!(!divisor.is_zero() && !divisor.is_negative());
    debug_assert!(!dividend.is_negative());

    let mut result = T::zero();
    let mut remaining = dividend.clone();
    let mut passes = 0u32;

    while remaining.cmp(divisor) != Ordering::Less {
        let (ratio, scale) = remaining.estimate_ratio(divisor);
        let mut approx = ratio.floor().max(1.0);

        // The double only resolves 53 bits; step down in units the estimate can represent.
        let log2 = approx.log2().ceil();
        let delta = if log2 <= EXACT_STEP_BITS {
            1.0
        } else {
            (log2 - EXACT_STEP_BITS).exp2()
        };

        let mut approx_result = T::from_estimate(approx, scale);
        let mut approx_remainder = approx_result.times(divisor);
        while approx_remainder.is_negative() || approx_remainder > remaining {
            approx -= delta;
            if approx < 1.0 {
                approx_result = T::zero();
                approx_remainder = T::zero();
                break;
            }
            approx_result = T::from_estimate(approx, scale);
            approx_remainder = approx_result.times(divisor);
        }

        if approx_result.is_zero() {
            approx_result = T::one();
            approx_remainder = divisor.clone();
        }

        result = result.plus(&approx_result);
        remaining = remaining.minus(&approx_remainder);
        passes += 1;
    }

    tracing::trace!(passes, "approximate quotient converged");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain machine integers, so the loop can be checked against native division.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Native(i64);

    impl ApproximateDivision for Native {
        fn zero() -> Self {
            Native(0)
        }
        fn one() -> Self {
            Native(1)
        }
        fn is_zero(&self) -> bool {
            self.0 == 0
        }
        fn is_negative(&self) -> bool {
            self.0 < 0
        }
        fn estimate_ratio(&self, divisor: &Self) -> (f64, u32) {
            (self.0 as f64 / divisor.0 as f64, 0)
        }
        fn from_estimate(approx: f64, _scale: u32) -> Self {
            Native(approx as i64)
        }
        fn plus(&self, other: &Self) -> Self {
            Native(self.0.wrapping_add(other.0))
        }
        fn minus(&self, other: &Self) -> Self {
            Native(self.0.wrapping_sub(other.0))
        }
        fn times(&self, other: &Self) -> Self {
            Native(self.0.wrapping_mul(other.0))
        }
    }

    #[test]
    fn test_matches_native_division() {
        let cases = [
            (0, 7),
            (6, 7),
            (7, 7),
            (120, 13),
            (1 << 40, 3),
            (i64::MAX, 1),
            (i64::MAX, 2),
            (i64::MAX, 1_000_000),
            (i64::MAX - 12345, 987_654_321_987),
        ];
        for (a, b) in cases {
            let q = approximate_quotient(&Native(a), &Native(b));
            assert_eq!(q, Native(a / b), "{} / {}", a, b);
        }
    }
}
