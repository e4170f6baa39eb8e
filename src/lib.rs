#![doc = r#"
squarescan — find runs of consecutive squares whose sum is itself a square.

For every starting index `i` in `[1, bound]` the crate sums `length` consecutive
squares `i² + (i+1)² + …` with the closed form `n(n+1)(2n+1)/6` and reports the
indices where that sum is a perfect square. The classic instance is
`1² + 2² + … + 24² = 70²`.

Arithmetic is arbitrary-precision: `length` may be any integer, and range sums
never overflow. `bound` is clamped to `i64`. By default squareness is decided
with an exact integer square root; the double-precision `sqrt`/`ceil`
comparison over `f64` prefix sums is also available as [`SquareTest::Float`].

Quick start: collect matches
----------------------------
```rust
use squarescan::{SquareSumScanner, ScanParams, scan};

let found: Vec<i64> = SquareSumScanner::new(50, 11).iter().map(|m| m.i).collect();
assert_eq!(found, vec![18, 38]);

let first = scan(&ScanParams::new(24, 24)).next().unwrap();
assert_eq!(first.to_string(), "i: 1, Result: 70.0");
```

Stream to a writer
------------------
```rust
use squarescan::{scan_to_writer, OutputFormat, ScanParams};

fn main() -> squarescan::Result<()> {
    let mut out = Vec::new();
    let report = scan_to_writer(&ScanParams::new(3, 1), OutputFormat::Text, &mut out)?;
    assert_eq!(report.matches, 3);
    assert_eq!(String::from_utf8_lossy(&out), "i: 1, Result: 1.0\ni: 2, Result: 2.0\ni: 3, Result: 3.0\n");
    Ok(())
}
```

Degenerate input
----------------
`length` is not validated. `length = 0` makes every range sum 0, so every
index matches with result `0.0`; a negative `length` produces negative sums,
which never match.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — formula, perfect-square tests and the scanner.
- [`types`] — `OutputFormat`, `SquareTest`, `Match`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::formula::{float_range_square_sum, range_square_sum, sum_of_squares};
pub use crate::core::params::ScanParams;
pub use crate::core::scanner::{Matches, SquareSumScanner, test_candidate};
pub use crate::core::square::{exact_root, float_root};
pub use error::{Error, Result};
pub use types::{Match, MatchRecord, OutputFormat, SquareTest};

pub use api::{
    ScanReport, parse_integer, saturate_bound, scan, scan_to_writer, write_match,
};
