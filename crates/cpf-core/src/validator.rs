//! Validation pipeline.
//!
//! `candidate -> normalize -> degenerate rule -> check digits -> verdict`
//!
//! A single pass with no state between calls. The degenerate rule runs before
//! the checksum and overrides it: `000.000.000-00` satisfies the arithmetic
//! but is never an issued number.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    check_digits::{BASE_LEN, compute_check_digits},
    digits::{Candidate, Digits, mask, normalize},
    error::Rejection,
};

/// A CPF that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(Digits);

impl Cpf {
    /// Completes a nine-digit base with its check digits.
    pub fn from_base(base: [u8; BASE_LEN]) -> Result<Self, Rejection> {
        if let Some(position) = base.iter().position(|&d| d > 9) {
            return Err(Rejection::DigitOutOfRange { position, value: base[position] });
        }

        let digits = Digits::from_parts(base, compute_check_digits(&base));
        reject_degenerate(&digits)?;
        Ok(Self(digits))
    }

    /// The validated digits.
    pub fn digits(&self) -> Digits {
        self.0
    }

    /// All eleven digits without separators.
    pub fn to_unmasked(&self) -> String {
        self.0.to_string()
    }

    /// Numeric form. Leading zeros are dropped.
    pub fn to_integer(&self) -> u64 {
        self.0.to_integer()
    }
}

/// Renders the masked form, `DDD.DDD.DDD-DD`.
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask(&self.0))
    }
}

impl FromStr for Cpf {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = Rejection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value.as_str())
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.to_string()
    }
}

/// Returns true if all eleven digits are the same.
pub fn is_degenerate(digits: &Digits) -> bool {
    let [head, rest @ ..] = digits.as_array();
    rest.iter().all(|d| d == head)
}

fn reject_degenerate(digits: &Digits) -> Result<(), Rejection> {
    if is_degenerate(digits) {
        return Err(Rejection::Degenerate { digit: digits.as_array()[0] });
    }
    Ok(())
}

/// Validates a candidate, returning the reason on failure.
pub fn validate<'a>(candidate: impl Into<Candidate<'a>>) -> Result<Cpf, Rejection> {
    let result = validate_digits(candidate.into());

    if let Err(rejection) = &result {
        tracing::trace!(kind = %rejection.kind(), reason = %rejection, "CPF candidate rejected");
    }

    result
}

fn validate_digits(candidate: Candidate<'_>) -> Result<Cpf, Rejection> {
    let digits = normalize(candidate)?;
    reject_degenerate(&digits)?;

    let expected = compute_check_digits(&digits.base());
    let actual = digits.check();
    if expected != actual {
        return Err(Rejection::ChecksumMismatch { expected, actual });
    }

    Ok(Cpf(digits))
}

/// Returns true if the candidate is a valid CPF.
///
/// Total over every input: malformed, absent, and out-of-range values all
/// yield `false`.
pub fn is_cpf<'a>(candidate: impl Into<Candidate<'a>>) -> bool {
    validate(candidate).is_ok()
}
