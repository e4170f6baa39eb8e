//! Command Line Interface (CLI) layer for squarescan.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It wires the two positional
//! integers to the library scan exposed via `squarescan::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
