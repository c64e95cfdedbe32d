//! Fuzz target for [`validate`]
//!
//! Untrusted input must always produce a verdict.
//!
//! # Strategy
//!
//! - Arbitrary text: random strings, plus masked-looking strings built from
//!   fuzzed digits and separators
//! - Arbitrary integers: the full `i128` range, negatives included
//! - Absence
//!
//! # Invariants
//!
//! - NEVER panic on any candidate
//! - `is_cpf` agrees with `validate`
//! - A valid CPF re-validates to itself through its masked, unmasked, and
//!   integer renderings
//! - A valid CPF is never eleven identical digits

#![no_main]

use arbitrary::Arbitrary;
use cpf_core::{is_cpf, is_degenerate, validate, Candidate, Cpf};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzCandidate {
    Text(String),
    Shaped { digits: [u8; 11], separators: [u8; 4] },
    Integer(i128),
    Absent,
}

const SEPARATORS: [char; 5] = ['.', '-', ' ', '/', 'x'];

/// Builds `DDD?DDD?DDD?DD` with fuzzed separators, some of them invalid.
fn shaped(digits: &[u8; 11], separators: &[u8; 4]) -> String {
    let mut out = String::new();
    for (i, d) in digits.iter().enumerate() {
        let slot = match i {
            3 => Some(0),
            6 => Some(1),
            9 => Some(2),
            _ => None,
        };
        if let Some(slot) = slot {
            out.push(SEPARATORS[usize::from(separators[slot]) % SEPARATORS.len()]);
        }
        out.push(char::from(b'0' + d % 10));
    }
    if separators[3] % 7 == 0 {
        out.push(' ');
    }
    out
}

fn check_valid(cpf: &Cpf) {
    assert!(!is_degenerate(&cpf.digits()), "valid CPF with identical digits: {cpf}");

    let masked = cpf.to_string();
    let unmasked = cpf.to_unmasked();
    assert_eq!(validate(masked.as_str()), Ok(*cpf));
    assert_eq!(validate(unmasked.as_str()), Ok(*cpf));
    assert_eq!(validate(cpf.to_integer()), Ok(*cpf));
}

fuzz_target!(|input: FuzzCandidate| {
    let text;
    let candidate = match &input {
        FuzzCandidate::Text(s) => Candidate::Text(s),
        FuzzCandidate::Shaped { digits, separators } => {
            text = shaped(digits, separators);
            Candidate::Text(&text)
        },
        FuzzCandidate::Integer(n) => Candidate::Integer(*n),
        FuzzCandidate::Absent => Candidate::Absent,
    };

    let result = validate(candidate);
    assert_eq!(is_cpf(candidate), result.is_ok());

    if let Ok(cpf) = &result {
        check_valid(cpf);
    }
});
