//! Per-candidate report rendering.

use std::io::Write;

use cpf_core::{Cpf, Rejection};
use serde::Serialize;

use crate::{CliError, OutputFormat};

/// Outcome for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// The candidate as given.
    pub input: &'a str,
    /// Verdict.
    pub valid: bool,
    /// Masked CPF, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    /// Rejection message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Rejection class label, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl<'a> Report<'a> {
    /// Builds the report for a validation result.
    pub fn new(input: &'a str, result: &Result<Cpf, Rejection>) -> Self {
        match result {
            Ok(cpf) => {
                Self { input, valid: true, cpf: Some(cpf.to_string()), reason: None, kind: None }
            },
            Err(rejection) => Self {
                input,
                valid: false,
                cpf: None,
                reason: Some(rejection.to_string()),
                kind: Some(rejection.kind().as_str()),
            },
        }
    }

    /// Writes the report as a single line.
    pub fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), CliError> {
        match format {
            OutputFormat::Text => match (&self.cpf, &self.reason) {
                (Some(cpf), _) => writeln!(out, "valid   {cpf}")?,
                (None, Some(reason)) => writeln!(out, "invalid {}: {reason}", self.input)?,
                (None, None) => writeln!(out, "invalid {}", self.input)?,
            },
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}
