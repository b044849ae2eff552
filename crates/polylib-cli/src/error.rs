//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A coefficient or point could not be parsed.
    #[error("Invalid complex number: {0}. Use RE or RE,IM (e.g. 2.5 or 0,-1).")]
    InvalidComplex(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] polylib::PolyError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
