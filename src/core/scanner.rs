use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use num_bigint::BigInt;
use tracing::debug;

use crate::core::formula::{float_range_square_sum, range_square_sum};
use crate::core::params::ScanParams;
use crate::core::square::{exact_root, float_root};
use crate::types::{Match, SquareTest, to_f64};

/// Judge a single starting index `i` under `test`.
///
/// `Exact` takes the integer root of the exact range sum. `Float` subtracts
/// the two prefix sums in double precision and compares `sqrt` with its
/// ceiling. Either way the returned match carries the exact sum.
pub fn test_candidate(i: i64, length: &BigInt, test: SquareTest) -> Option<Match> {
    let sum = range_square_sum(i, length);
    let result = match test {
        SquareTest::Exact => exact_root(&sum).map(|root| to_f64(&root)),
        SquareTest::Float => float_root(float_range_square_sum(i, length)),
    }?;
    Some(Match { i, sum, result })
}

/// Scans starting indices `1..=bound` for runs of `length` consecutive squares
/// whose sum is a perfect square.
///
/// The scanner itself holds no progress; every call to [`iter`](Self::iter)
/// starts a fresh, deterministic pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareSumScanner {
    bound: i64,
    length: BigInt,
    test: SquareTest,
}

impl SquareSumScanner {
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

    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn length(&self) -> &BigInt {
        &self.length
    }

    pub fn test(&self) -> SquareTest {
        self.test
    }

    /// Lazily yield matches in ascending order of `i`.
    pub fn iter(&self) -> Matches {
        Matches {
            range: 1..=self.bound,
            length: self.length.clone(),
            test: self.test,
            scanned: 0,
        }
    }
}

impl From<&ScanParams> for SquareSumScanner {
    fn from(params: &ScanParams) -> Self {
        Self::new(params.bound, params.length.clone()).with_test(params.test)
    }
}

impl<'a> IntoIterator for &'a SquareSumScanner {
    type Item = Match;
    type IntoIter = Matches;

    fn into_iter(self) -> Matches {
        self.iter()
    }
}

/// Iterator over the matches of one scan pass
#[derive(Debug, Clone)]
pub struct Matches {
    range: RangeInclusive<i64>,
    length: BigInt,
    test: SquareTest,
    scanned: u64,
}

impl Matches {
    /// Number of candidate indices examined so far
    pub fn scanned(&self) -> u64 {
        self.scanned
    }
}

impl Iterator for Matches {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        for i in self.range.by_ref() {
            self.scanned += 1;
            if let Some(m) = test_candidate(i, &self.length, self.test) {
                debug!("Match at i={}: sum={}, result={:?}", m.i, m.sum, m.result);
                return Some(m);
            }
        }
        None
    }
}

impl FusedIterator for Matches {}
