use std::io::{self, BufWriter};

use tracing::{debug, info};

use squarescan::{ScanParams, parse_integer, saturate_bound, scan_to_writer};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs, program: &str) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let (Some(bound), Some(length)) = (args.bound.as_deref(), args.length.as_deref()) else {
        return Err(AppError::Usage {
            program: program.to_string(),
        });
    };

    if !args.rest.is_empty() {
        debug!("Ignoring extra arguments: {:?}", args.rest);
    }

    let bound = parse_integer("bound", bound)?;
    let length = parse_integer("length", length)?;
    let params = ScanParams::new(saturate_bound(&bound), length).with_test(args.test);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = scan_to_writer(&params, args.format, &mut out)?;

    info!("Scan complete!");
    info!("Scanned: {}", report.scanned);
    info!("Matches: {}", report.matches);

    Ok(())
}
