//! Input normalization.
//!
//! Every accepted input shape is resolved here into a fixed eleven-digit
//! sequence. Nothing downstream looks at the original representation.
//!
//! # Accepted shapes
//!
//! - Text: ASCII digits mixed with the separators `.`, `-` and whitespace.
//!   Separators are dropped; any other character rejects the input.
//! - Integer: non-negative, at most eleven decimal digits. Left-padded with
//!   zeros, so `4_359_457_006` normalizes to `04359457006`.
//! - Absent: always rejected.
//!
//! The integer path assumes the caller's number is the CPF with its leading
//! zeros dropped and nothing else. Padding restores them; no other intent is
//! guessed.

use std::fmt;

use crate::{
    check_digits::{BASE_LEN, CheckDigits},
    error::Rejection,
};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Largest integer that fits in eleven decimal digits.
const MAX_INTEGER: i128 = 99_999_999_999;

/// An untrusted CPF candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Masked or unmasked text.
    Text(&'a str),
    /// Numeric form with leading zeros dropped.
    Integer(i128),
    /// No value.
    Absent,
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

macro_rules! integer_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Candidate<'_> {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_candidate!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl<'a, T> From<Option<T>> for Candidate<'a>
where
    T: Into<Candidate<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Eleven decimal digits, leading zeros kept.
///
/// Positions 0-8 are the base, 9 and 10 the check digits. No checksum
/// guarantee: see [`crate::Cpf`] for a validated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digits([u8; CPF_LEN]);

impl Digits {
    /// Wraps raw digit values, checking each is in 0-9.
    pub fn from_array(digits: [u8; CPF_LEN]) -> Result<Self, Rejection> {
        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(Rejection::DigitOutOfRange { position, value: digits[position] });
        }
        Ok(Self(digits))
    }

    /// Builds the sequence from a base and its check digits.
    pub(crate) fn from_parts(base: [u8; BASE_LEN], check: CheckDigits) -> Self {
        let mut digits = [0; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = check.first;
        digits[BASE_LEN + 1] = check.second;
        Self(digits)
    }

    /// The first nine digits.
    pub fn base(&self) -> [u8; BASE_LEN] {
        let mut base = [0; BASE_LEN];
        base.copy_from_slice(&self.0[..BASE_LEN]);
        base
    }

    /// The supplied check digits, positions 9 and 10.
    pub fn check(&self) -> CheckDigits {
        CheckDigits { first: self.0[BASE_LEN], second: self.0[BASE_LEN + 1] }
    }

    /// All eleven digits.
    pub fn as_array(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// The digits read as a decimal number, leading zeros lost.
    pub fn to_integer(&self) -> u64 {
        self.0.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
    }
}

/// Renders all eleven digits without separators.
impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|d| write!(f, "{d}"))
    }
}

/// Normalizes a candidate into eleven digits.
pub fn normalize<'a>(candidate: impl Into<Candidate<'a>>) -> Result<Digits, Rejection> {
    match candidate.into() {
        Candidate::Text(text) => normalize_text(text),
        Candidate::Integer(value) => normalize_integer(value),
        Candidate::Absent => Err(Rejection::Absent),
    }
}

fn normalize_text(text: &str) -> Result<Digits, Rejection> {
    let mut digits = [0; CPF_LEN];
    let mut count = 0;

    for (position, character) in text.chars().enumerate() {
        if character.is_ascii_digit() {
            // Keep counting past the limit so the length error is accurate.
            if let Some(slot) = digits.get_mut(count) {
                *slot = character as u8 - b'0';
            }
            count += 1;
        } else if !is_separator(character) {
            return Err(Rejection::InvalidCharacter { character, position });
        }
    }

    if count != CPF_LEN {
        return Err(Rejection::WrongLength { actual: count });
    }
    Ok(Digits(digits))
}

fn normalize_integer(value: i128) -> Result<Digits, Rejection> {
    if value < 0 {
        return Err(Rejection::Negative { value });
    }
    if value > MAX_INTEGER {
        return Err(Rejection::WrongLength { actual: decimal_len(value) });
    }

    let mut digits = [0; CPF_LEN];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    Ok(Digits(digits))
}

fn decimal_len(mut value: i128) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

fn is_separator(character: char) -> bool {
    matches!(character, '.' | '-') || character.is_whitespace()
}

/// Renders the conventional `DDD.DDD.DDD-DD` mask.
pub fn mask(digits: &Digits) -> String {
    let mut out = String::with_capacity(CPF_LEN + 3);
    for (i, d) in digits.0.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {},
        }
        out.push(char::from(b'0' + d));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmasked_text() {
        let digits = normalize("11116506670").unwrap();
        assert_eq!(digits.as_array(), &[1, 1, 1, 1, 6, 5, 0, 6, 6, 7, 0]);
    }

    #[test]
    fn masked_text_matches_unmasked() {
        assert_eq!(normalize("043.594.570-06"), normalize("04359457006"));
    }

    #[test]
    fn whitespace_is_a_separator() {
        assert_eq!(normalize(" 043 594 570 06\n"), normalize("04359457006"));
    }

    #[test]
    fn letters_are_rejected() {
        assert_eq!(
            normalize("asassssssss"),
            Err(Rejection::InvalidCharacter { character: 'a', position: 0 })
        );
    }

    #[test]
    fn letter_after_digits_reports_position() {
        assert_eq!(
            normalize("1111650667x"),
            Err(Rejection::InvalidCharacter { character: 'x', position: 10 })
        );
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let result = normalize("١١١١٦٥٠٦٦٧٠");
        assert!(matches!(result, Err(Rejection::InvalidCharacter { position: 0, .. })));
    }

    #[test]
    fn truncated_mask_is_wrong_length() {
        assert_eq!(normalize("530.194.510-"), Err(Rejection::WrongLength { actual: 9 }));
        assert_eq!(normalize("530.194.-62"), Err(Rejection::WrongLength { actual: 8 }));
        assert_eq!(normalize("53062"), Err(Rejection::WrongLength { actual: 5 }));
        assert_eq!(normalize(""), Err(Rejection::WrongLength { actual: 0 }));
    }

    #[test]
    fn overlong_text_reports_full_count() {
        assert_eq!(normalize("1111650667012"), Err(Rejection::WrongLength { actual: 13 }));
    }

    #[test]
    fn integer_is_left_padded() {
        let digits = normalize(4_359_457_006_u64).unwrap();
        assert_eq!(digits.to_string(), "04359457006");
    }

    #[test]
    fn small_integer_pads_to_full_width() {
        let digits = normalize(1234).unwrap();
        assert_eq!(digits.to_string(), "00000001234");
    }

    #[test]
    fn negative_integer_is_rejected() {
        assert_eq!(normalize(-5_i64), Err(Rejection::Negative { value: -5 }));
    }

    #[test]
    fn twelve_digit_integer_is_wrong_length() {
        assert_eq!(normalize(100_000_000_000_u64), Err(Rejection::WrongLength { actual: 12 }));
        assert_eq!(normalize(u64::MAX), Err(Rejection::WrongLength { actual: 20 }));
    }

    #[test]
    fn absent_is_rejected() {
        assert_eq!(normalize(None::<&str>), Err(Rejection::Absent));
        assert_eq!(normalize(Candidate::Absent), Err(Rejection::Absent));
    }

    #[test]
    fn present_option_unwraps() {
        assert_eq!(normalize(Some("04359457006")), normalize("04359457006"));
        assert_eq!(normalize(Some(70_427_851_009_u64)), normalize("70427851009"));
    }

    #[test]
    fn from_array_rejects_out_of_range() {
        let mut raw = [1; CPF_LEN];
        raw[4] = 10;
        assert_eq!(
            Digits::from_array(raw),
            Err(Rejection::DigitOutOfRange { position: 4, value: 10 })
        );
    }

    #[test]
    fn base_and_check_split() {
        let digits = normalize("53019451060").unwrap();
        assert_eq!(digits.base(), [5, 3, 0, 1, 9, 4, 5, 1, 0]);
        assert_eq!(digits.check(), CheckDigits { first: 6, second: 0 });
    }

    #[test]
    fn mask_inserts_separators() {
        let digits = normalize("04844873024").unwrap();
        assert_eq!(mask(&digits), "048.448.730-24");
    }

    #[test]
    fn to_integer_drops_leading_zeros() {
        let digits = normalize("04844873024").unwrap();
        assert_eq!(digits.to_integer(), 4_844_873_024);
    }
}
