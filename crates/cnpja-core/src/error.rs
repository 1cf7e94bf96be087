//! Validation error taxonomy for the CNPJ core.
//!
//! [`normalize`](crate::normalize::normalize) and
//! [`check_digits`](crate::checksum::check_digits) surface these errors to
//! their direct caller. The absorbing entry points
//! ([`is_valid`](crate::is_valid), [`format`](crate::format)) collapse them
//! into a `bool` or a sentinel string and never propagate typed errors;
//! callers needing diagnostics invoke the lower-level function directly.

use thiserror::Error;

/// Reasons an input fails CNPJ validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input contains a character outside `[0-9A-Z./-]`. Lowercase letters
    /// are rejected here, not folded.
    #[error("invalid character set in {0:?}: only [0-9A-Z] and the mask punctuation ./- are allowed")]
    InvalidCharacterSet(String),

    /// After normalization the value is not the expected length over
    /// `[0-9A-Z]`, or is the all-zero sentinel value.
    #[error("invalid base {0:?}: expected [0-9A-Z] of the required length, not all zeros")]
    InvalidBase(String),

    /// The check-digit suffix does not match the digits computed from the
    /// base.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Digits computed from the 12-character base.
        expected: String,
        /// Digits present in the input.
        found: String,
    },
}
