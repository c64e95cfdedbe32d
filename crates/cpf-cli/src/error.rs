//! CLI error types.

use thiserror::Error;

/// Errors that stop a check run.
///
/// Invalid CPFs are not errors; they are reported and counted.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading candidates or writing reports failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be encoded.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither arguments nor stdin supplied a candidate.
    #[error("no CPF values to check")]
    NoInput,
}
