//! CPF checker runtime.
//!
//! Drives [`cpf_core::validate`] over a batch of candidates and writes one
//! report line per candidate. The binary in `main.rs` only parses arguments,
//! installs logging, and maps the [`Summary`] to an exit status.
//!
//! ## Architecture
//!
//! ```text
//! cpf-check
//!   ├─ Args          (clap, main.rs)
//!   ├─ CheckConfig   (output format, quiet, fail-fast)
//!   ├─ check_values  (validation loop)
//!   └─ Report        (text or JSON line per candidate)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod report;

use std::io::{BufRead, Write};

use clap::ValueEnum;
pub use error::CliError;
pub use report::Report;

/// How each report line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `valid   DDD.DDD.DDD-DD` or `invalid <input>: <reason>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Settings for a check run.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Report rendering
    pub format: OutputFormat,
    /// Suppress all reports; only the summary matters
    pub quiet: bool,
    /// Stop at the first invalid candidate
    pub fail_fast: bool,
}

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Candidates examined.
    pub checked: usize,
    /// Candidates that passed.
    pub valid: usize,
    /// Candidates that failed.
    pub invalid: usize,
}

impl Summary {
    /// Returns true if every examined candidate passed.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Reads candidates from `reader`, one per non-empty line.
///
/// Surrounding whitespace is trimmed.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    Ok(candidates)
}

/// Validates every candidate and writes its report to `out`.
///
/// # Errors
///
/// Returns error if:
/// - `values` is empty
/// - Writing a report fails
pub fn check_values<I, S, W>(
    config: &CheckConfig,
    values: I,
    out: &mut W,
) -> Result<Summary, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut summary = Summary::default();

    for value in values {
        let input = value.as_ref();
        let result = cpf_core::validate(input);
        summary.checked += 1;

        match &result {
            Ok(cpf) => {
                summary.valid += 1;
                tracing::debug!(%cpf, "valid CPF");
            },
            Err(rejection) => {
                summary.invalid += 1;
                tracing::debug!(input, kind = %rejection.kind(), %rejection, "invalid CPF");
            },
        }

        if !config.quiet {
            Report::new(input, &result).write_to(config.format, out)?;
        }

        if config.fail_fast && result.is_err() {
            tracing::debug!("stopping at first invalid candidate");
            break;
        }
    }

    if summary.checked == 0 {
        return Err(CliError::NoInput);
    }

    out.flush()?;
    tracing::info!(
        checked = summary.checked,
        valid = summary.valid,
        invalid = summary.invalid,
        "check finished"
    );

    Ok(summary)
}
