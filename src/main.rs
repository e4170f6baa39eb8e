//! squarescan CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the scan, and exit with
//! status 1 on a usage error. For programmatic use, prefer the library API
//! (`squarescan::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "squarescan".to_string());
    let args = cli::CliArgs::parse();

    match cli::run(args, &program) {
        Err(usage @ cli::errors::AppError::Usage { .. }) => {
            println!("{}", usage);
            std::process::exit(1);
        }
        other => other.map_err(Into::into),
    }
}
