use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::Signed;

/// Integer square root of `sum` if `sum` is a perfect square.
pub fn exact_root(sum: &BigInt) -> Option<BigInt> {
    if sum.is_negative() {
        return None;
    }
    let root = Roots::sqrt(sum);
    (&root * &root == *sum).then_some(root)
}

/// Double-precision `sqrt(sum)` if it equals its own ceiling.
///
/// Negative and `NaN` sums never match.
pub fn float_root(sum: f64) -> Option<f64> {
    let result = sum.sqrt();
    (result.ceil() == result).then_some(result)
}
