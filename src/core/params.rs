use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::types::SquareTest;

/// Scan parameters suitable for embedding and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Inclusive upper limit of the starting index; values below 1 scan nothing
    pub bound: i64,
    /// Count of consecutive squares summed per candidate. Not validated.
    #[serde(with = "decimal")]
    pub length: BigInt,
    #[serde(default)]
    pub test: SquareTest,
}

impl ScanParams {
    pub fn new<L: Into<BigInt>>(bound: i64, length: L) -> Self {
        Self {
            bound,
            length: length.into(),
            test: SquareTest::default(),
        }
    }

    pub fn with_test(mut self, test: SquareTest) -> Self {
        self.test = test;
        self
    }
}

impl Default for ScanParams {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// `BigInt` as a decimal string; plain JSON integers are accepted on input.
mod decimal {
    use num_bigint::BigInt;
    use serde::de;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(n: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(n)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Int(n) => Ok(BigInt::from(n)),
            Repr::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}
