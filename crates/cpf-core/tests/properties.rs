//! Property-based tests for CPF validation.
//!
//! Valid numbers are generated by completing a random nine-digit base with
//! its computed check digits, then checked through every accepted input
//! shape.

use cpf_core::{Cpf, Rejection, is_cpf, mask, normalize, validate};
use proptest::prelude::*;

fn base_strategy() -> impl Strategy<Value = [u8; 9]> {
    prop::array::uniform9(0u8..10)
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

proptest! {
    #[test]
    fn prop_completed_base_is_valid_in_every_form(base in base_strategy()) {
        // Only the all-same bases fail to complete.
        let Ok(cpf) = Cpf::from_base(base) else {
            return Err(TestCaseError::reject("degenerate base"));
        };

        let unmasked = cpf.to_unmasked();
        let masked = cpf.to_string();

        prop_assert!(is_cpf(unmasked.as_str()));
        prop_assert!(is_cpf(masked.as_str()));
        prop_assert!(is_cpf(cpf.to_integer()));
        prop_assert_eq!(validate(masked.as_str()), Ok(cpf));
    }

    #[test]
    fn prop_altered_check_digit_is_invalid(
        base in base_strategy(),
        second in any::<bool>(),
        delta in 1u8..10,
    ) {
        let Ok(cpf) = Cpf::from_base(base) else {
            return Err(TestCaseError::reject("degenerate base"));
        };

        let mut digits = *cpf.digits().as_array();
        let index = if second { 10 } else { 9 };
        digits[index] = (digits[index] + delta) % 10;
        let altered = digits_to_string(&digits);

        // Altering can land on an all-same sequence; either way it is invalid.
        prop_assert!(!is_cpf(altered.as_str()));
    }

    #[test]
    fn prop_masked_and_unmasked_agree(raw in "[0-9]{11}") {
        let digits = normalize(raw.as_str()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let masked = mask(&digits);

        prop_assert_eq!(is_cpf(raw.as_str()), is_cpf(masked.as_str()));
        prop_assert_eq!(validate(raw.as_str()), validate(masked.as_str()));
    }

    #[test]
    fn prop_integer_and_text_agree(value in 0u64..100_000_000_000) {
        let text = format!("{value:011}");
        prop_assert_eq!(validate(value), validate(text.as_str()));
    }

    #[test]
    fn prop_wrong_digit_count_is_malformed(raw in "[0-9]{0,10}|[0-9]{12,20}") {
        prop_assert_eq!(validate(raw.as_str()), Err(Rejection::WrongLength { actual: raw.len() }));
    }

    #[test]
    fn prop_letters_are_rejected(
        prefix in "[0-9.\\-]{0,8}",
        letter in "[a-zA-Z]",
        suffix in "[0-9]{0,11}",
    ) {
        let input = format!("{prefix}{letter}{suffix}");
        let rejected = matches!(validate(input.as_str()), Err(Rejection::InvalidCharacter { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn prop_repeated_digit_is_degenerate(digit in 0u8..10, masked in any::<bool>()) {
        let raw = digits_to_string(&[digit; 11]);
        let input = if masked {
            format!("{}.{}.{}-{}", &raw[0..3], &raw[3..6], &raw[6..9], &raw[9..11])
        } else {
            raw
        };

        prop_assert_eq!(validate(input.as_str()), Err(Rejection::Degenerate { digit }));
    }
}

#[test]
fn prop_any_text_is_total() {
    proptest!(|(input in any::<String>())| {
        // PROPERTY: Totality - a verdict for every string, no panic
        let verdict = is_cpf(input.as_str());
        prop_assert_eq!(verdict, validate(input.as_str()).is_ok());
    });
}

#[test]
fn prop_any_integer_is_total() {
    proptest!(|(value in any::<i128>())| {
        let verdict = is_cpf(value);
        if value < 0 || value > 99_999_999_999 {
            prop_assert!(!verdict);
        }
    });
}
