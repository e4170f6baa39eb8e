//! Crate-level error type and `Result` alias.
//! Converts underlying I/O and serialization errors, and provides a semantic
//! variant for rejected command-line integers.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid integer for {arg}: {value:?} ({source})")]
    InvalidInteger {
        arg: &'static str,
        value: String,
        #[source]
        source: num_bigint::ParseBigIntError,
    },
}
