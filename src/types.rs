//! Shared types used across squarescan.
//! Includes `OutputFormat`, `SquareTest`, and the `Match` value yielded by scans.
use std::fmt;

use clap::ValueEnum;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// How match lines are rendered
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `i: <i>, Result: <result>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// How a range sum is judged to be a perfect square
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SquareTest {
    /// Integer square root, squared back and compared
    #[default]
    Exact,
    /// `sqrt` in double precision, compared against its ceiling
    Float,
}

impl fmt::Display for SquareTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SquareTest::Exact => "exact",
            SquareTest::Float => "float",
        };
        write!(f, "{}", s)
    }
}

/// A starting index whose run of squares sums to a perfect square
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Starting index of the run
    pub i: i64,
    /// Exact sum of the run
    pub sum: BigInt,
    /// Square root of `sum`, as printed
    pub result: f64,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i: {}, Result: {:?}", self.i, self.result)
    }
}

/// Serialized shape of a match in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub i: i64,
    pub result: f64,
    pub sum: String,
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        Self {
            i: m.i,
            result: m.result,
            sum: m.sum.to_string(),
        }
    }
}

/// Lossy conversion used for printing; huge values saturate to infinity.
pub(crate) fn to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_display_uses_float_rendering() {
        let m = Match {
            i: 1,
            sum: BigInt::from(4900),
            result: 70.0,
        };
        assert_eq!(m.to_string(), "i: 1, Result: 70.0");
    }

    #[test]
    fn zero_result_renders_with_decimal() {
        let m = Match {
            i: 7,
            sum: BigInt::from(0),
            result: 0.0,
        };
        assert_eq!(m.to_string(), "i: 7, Result: 0.0");
    }

    #[test]
    fn record_carries_exact_sum() {
        let m = Match {
            i: 1,
            sum: BigInt::from(4900),
            result: 70.0,
        };
        let record = MatchRecord::from(&m);
        assert_eq!(record.sum, "4900");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"i":1,"result":70.0,"sum":"4900"}"#
        );
    }
}
