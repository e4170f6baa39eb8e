use num_bigint::BigInt;

use crate::types::to_f64;

/// Closed-form `1² + 2² + … + n²`, i.e. `n(n+1)(2n+1)/6`.
///
/// Defined for every integer `n`: the triple product is always divisible by 6,
/// so the division is exact for negative inputs too. `sum_of_squares(0) == 0`.
pub fn sum_of_squares<N: Into<BigInt>>(n: N) -> BigInt {
    let n: BigInt = n.into();
    let product = &n * (&n + 1) * (&n * 2 + 1);
    product / 6
}

/// Sum of squares from `i` to `i + length - 1` inclusive.
///
/// Computed as a difference of two prefix sums, so `length == 0` gives 0 and a
/// negative `length` gives the negated sum over the skipped range.
pub fn range_square_sum(i: i64, length: &BigInt) -> BigInt {
    let start = BigInt::from(i);
    let last = &start + length - 1;
    sum_of_squares(last) - sum_of_squares(start - 1)
}

/// Same range sum, but with each prefix sum rounded to `f64` before the
/// subtraction. Above 2^53 this loses low digits, and it is `NaN` once a
/// prefix sum overflows to infinity.
pub fn float_range_square_sum(i: i64, length: &BigInt) -> f64 {
    let start = BigInt::from(i);
    let last = &start + length - 1;
    to_f64(&sum_of_squares(last)) - to_f64(&sum_of_squares(start - 1))
}
