//! High-level library API: run a scan from `ScanParams`, stream matches to any
//! writer in text or JSON form, and parse command-line integers. Prefer these
//! entrypoints over the `core` modules when embedding squarescan.
use std::io::Write;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::params::ScanParams;
use crate::core::scanner::{Matches, SquareSumScanner};
use crate::error::{Error, Result};
use crate::types::{Match, MatchRecord, OutputFormat};

/// Totals for one completed scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub scanned: u64,
    pub matches: u64,
}

/// Parse a base-10 integer argument of any size, naming `arg` in the error.
///
/// Surrounding ASCII whitespace is ignored, as are `_` separators between digits.
pub fn parse_integer(arg: &'static str, value: &str) -> Result<BigInt> {
    value
        .trim_ascii()
        .parse::<BigInt>()
        .map_err(|source| Error::InvalidInteger {
            arg,
            value: value.to_string(),
            source,
        })
}

/// Clamp a parsed bound to the scannable `i64` range.
///
/// Anything below 1 scans nothing either way; a bound past `i64::MAX` is
/// cut to `i64::MAX`, which no scan reaches in practice.
pub fn saturate_bound(bound: &BigInt) -> i64 {
    bound
        .to_i64()
        .unwrap_or(if bound.is_negative() { 0 } else { i64::MAX })
}

/// Start a lazy scan described by `params`
pub fn scan(params: &ScanParams) -> Matches {
    if !params.length.is_positive() {
        debug!(
            "Unvalidated length {}: range sums are empty or negative",
            params.length
        );
    }
    SquareSumScanner::from(params).iter()
}

/// Write one match as a single line in `format`
pub fn write_match<W: Write>(writer: &mut W, m: &Match, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", m)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &MatchRecord::from(m))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Run a full scan, streaming each match to `writer` as it is found
pub fn scan_to_writer<W: Write>(
    params: &ScanParams,
    format: OutputFormat,
    writer: &mut W,
) -> Result<ScanReport> {
    info!(
        "Scanning i in [1, {}] with length {} ({} test)",
        params.bound, params.length, params.test
    );

    let mut report = ScanReport::default();
    let mut matches = scan(params);
    for m in matches.by_ref() {
        write_match(writer, &m, format)?;
        report.matches += 1;
    }
    writer.flush()?;

    report.scanned = matches.scanned();
    Ok(report)
}
