use clap::Parser;

use squarescan::{OutputFormat, SquareTest};

#[derive(Parser, Debug)]
#[command(
    name = "squarescan",
    version,
    about = "Find runs of consecutive squares that sum to a perfect square",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Inclusive upper limit for the starting index
    pub bound: Option<String>,

    /// Number of consecutive squares summed per candidate
    pub length: Option<String>,

    /// Extra positionals are accepted and ignored, dashes included
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Perfect-square test (exact integer root or float sqrt/ceil)
    #[arg(long, value_enum, default_value_t = SquareTest::Exact)]
    pub test: SquareTest,

    /// Enable logging to stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
