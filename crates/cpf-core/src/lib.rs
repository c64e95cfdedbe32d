//! CPF Validation
//!
//! Decides whether a candidate value is a valid Brazilian individual taxpayer
//! registry number (CPF).
//!
//! # Design
//!
//! All functions in this crate are pure. They hold no state, do no I/O, and
//! never panic on any input. Untrusted input is expected to be malformed and
//! comes back as a [`Rejection`], not as a fault.
//!
//! # Pipeline
//!
//! ```text
//! Candidate ──normalize──▶ Digits ──degenerate rule──▶ check digits ──▶ Cpf
//!     │                      │                              │
//!     └──────────────────────┴───────── Rejection ◀─────────┘
//! ```
//!
//! # Components
//!
//! - [`Candidate`]: text, integer, or absent input
//! - [`normalize`]: input shape to eleven [`Digits`]
//! - [`compute_check_digits`]: weighted-sum-mod-11 over the first nine digits
//! - [`validate`] / [`is_cpf`]: the full pipeline
//!
//! # Example
//!
//! ```
//! use cpf_core::{Rejection, is_cpf, validate};
//!
//! assert!(is_cpf("048.448.730-24"));
//! assert!(is_cpf(70_427_851_009_u64));
//! assert!(!is_cpf(None::<&str>));
//!
//! let cpf = validate("04844873024").unwrap();
//! assert_eq!(cpf.to_string(), "048.448.730-24");
//!
//! assert_eq!(validate("111.111.111-11"), Err(Rejection::Degenerate { digit: 1 }));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod check_digits;
mod digits;
mod error;
mod validator;

pub use check_digits::{BASE_LEN, CheckDigits, compute_check_digits};
pub use digits::{CPF_LEN, Candidate, Digits, mask, normalize};
pub use error::{Rejection, RejectionKind};
pub use validator::{Cpf, is_cpf, is_degenerate, validate};
