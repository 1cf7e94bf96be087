//! Weighted modulo-11 check-digit computation.
//!
//! The two check digits are derived from weighted sums over the
//! 12-character base. Character values follow the federal alphanumeric
//! CNPJ rule: the ASCII code minus 48, so `0`-`9` map to 0–9 and `A`-`Z`
//! map to 17–42.

use crate::error::ValidationError;

/// Ordered weights consumed by both check-digit passes.
///
/// Entry `i+1` weights base position `i` in the first pass, entry `i` in
/// the second; the final entry weights the first check digit itself when it
/// joins the second sum. 13 entries: 12 base positions plus that one slot.
pub const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Length of the identifier base (the payload before the check digits).
pub const BASE_LEN: usize = 12;

const ZERO_BASE: &str = "000000000000";

/// Numeric value of a base character: ASCII code minus 48.
fn char_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() || c.is_ascii_uppercase() {
        Some(c as u32 - '0' as u32)
    } else {
        None
    }
}

/// Compute the two check digits for a 12-character base.
///
/// Pure and deterministic: the same base always yields the same digits.
/// The digits are returned as a two-character decimal string,
/// most-significant first.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBase`] unless `base` is exactly 12
/// characters of `[0-9A-Z]` and is not the all-zero string. A full
/// 14-character identifier is rejected, not truncated; slice the base off
/// first.
///
/// # Example
///
/// ```
/// assert_eq!(cnpja_core::check_digits("TK10BO3IH1GA").unwrap(), "13");
/// ```
pub fn check_digits(base: &str) -> Result<String, ValidationError> {
    if base.len() != BASE_LEN || base == ZERO_BASE {
        return Err(ValidationError::InvalidBase(base.to_string()));
    }

    let mut sum1 = 0u32;
    let mut sum2 = 0u32;
    for (i, c) in base.chars().enumerate() {
        let value =
            char_value(c).ok_or_else(|| ValidationError::InvalidBase(base.to_string()))?;
        sum1 += value * WEIGHTS[i + 1];
        sum2 += value * WEIGHTS[i];
    }

    let d1 = fold_mod11(sum1);
    sum2 += d1 * WEIGHTS[12];
    let d2 = fold_mod11(sum2);

    Ok(format!("{d1}{d2}"))
}

/// Fold a weighted sum into a single decimal check digit.
fn fold_mod11(sum: u32) -> u32 {
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
