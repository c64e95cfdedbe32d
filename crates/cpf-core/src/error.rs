//! Rejection reasons.

use thiserror::Error;

use crate::check_digits::CheckDigits;

/// Why a candidate is not a valid CPF.
///
/// Every rejection is an expected outcome of validating untrusted input, never
/// a fault. [`crate::is_cpf`] collapses all of them to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No value was supplied.
    #[error("no value provided")]
    Absent,

    /// Integer candidate below zero.
    #[error("negative number {value} cannot be a CPF")]
    Negative {
        /// The rejected integer.
        value: i128,
    },

    /// Text candidate holds something other than digits and separators.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index in the original text.
        position: usize,
    },

    /// Digit count after stripping separators is not 11.
    #[error("expected 11 digits, found {actual}")]
    WrongLength {
        /// Number of digits found.
        actual: usize,
    },

    /// A raw digit value outside 0-9.
    #[error("digit at position {position} is out of range: {value}")]
    DigitOutOfRange {
        /// Index of the digit.
        position: usize,
        /// The value supplied.
        value: u8,
    },

    /// All eleven digits are the same.
    #[error("all digits are {digit}")]
    Degenerate {
        /// The repeated digit.
        digit: u8,
    },

    /// Supplied check digits differ from the computed ones.
    #[error("check digits mismatch: expected {expected}, found {actual}")]
    ChecksumMismatch {
        /// Check digits computed from the base.
        expected: CheckDigits,
        /// Check digits present in the candidate.
        actual: CheckDigits,
    },
}

/// Coarse classification of a [`Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Input could not be normalized into eleven digits.
    Malformed,
    /// Known placeholder sequence.
    Degenerate,
    /// Arithmetic check failed.
    ChecksumMismatch,
}

impl RejectionKind {
    /// Stable machine-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Degenerate => "degenerate",
            Self::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Rejection {
    /// Returns the class this rejection belongs to.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Absent
            | Self::Negative { .. }
            | Self::InvalidCharacter { .. }
            | Self::WrongLength { .. }
            | Self::DigitOutOfRange { .. } => RejectionKind::Malformed,

            Self::Degenerate { .. } => RejectionKind::Degenerate,

            Self::ChecksumMismatch { .. } => RejectionKind::ChecksumMismatch,
        }
    }
}
