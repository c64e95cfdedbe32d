//! Check-digit calculation.
//!
//! Both check digits use the same weighted-sum-mod-11 rule. The first runs
//! over the nine base digits with weights 10 down to 2. The second runs over
//! the base digits followed by the first check digit, with weights 11 down to
//! 2.
//!
//! # Invariants
//!
//! - Each computed digit is in 0-9: remainders 0 and 1 map to 0, every other
//!   remainder `r` maps to `11 - r`.
//! - The largest possible sum is `9 * (11 + 10 + ... + 2) = 585`, well within
//!   `u32`.

use std::fmt;

/// Number of base digits that feed the calculation.
pub const BASE_LEN: usize = 9;

/// The two trailing digits of a CPF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigits {
    /// Tenth digit.
    pub first: u8,
    /// Eleventh digit.
    pub second: u8,
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Computes the check digits for a nine-digit base.
///
/// Every element of `base` must be in 0-9. Callers holding a
/// [`crate::Digits`] already satisfy this.
pub fn compute_check_digits(base: &[u8; BASE_LEN]) -> CheckDigits {
    let first = check_digit(base.iter().copied(), 10);
    let second = check_digit(base.iter().copied().chain(std::iter::once(first)), 11);

    CheckDigits { first, second }
}

/// Weighted sum starting at `top_weight` and decreasing by one per digit,
/// reduced to a single check digit.
fn check_digit(digits: impl Iterator<Item = u8>, top_weight: u32) -> u8 {
    let sum: u32 = digits.zip((2..=top_weight).rev()).map(|(d, w)| u32::from(d) * w).sum();

    match sum % 11 {
        0 | 1 => 0,
        // 2..=10, so the result is 1..=9
        remainder => (11 - remainder) as u8,
    }
}
