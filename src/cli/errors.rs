use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: {program} <bound> <length>")]
    Usage { program: String },

    #[error(transparent)]
    Scan(#[from] squarescan::Error),
}
