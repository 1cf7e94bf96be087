//! Mask stripping and character-set validation.
//!
//! Canonicalization must precede any checksum computation: the checksum
//! engine and the validator both operate on the unmasked, upper-case form
//! produced here. Length is deliberately not enforced at this layer;
//! callers require 12 or 14 characters at the point of use.

use crate::error::ValidationError;

/// Punctuation accepted (and stripped) as display-mask characters.
const MASK_CHARS: [char; 3] = ['.', '/', '-'];

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase() || MASK_CHARS.contains(&c)
}

/// Strip mask punctuation from `input` and return the upper-case remainder.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacterSet`] if `input` contains any
/// character outside `[0-9A-Z./-]`. Lowercase letters are an error, not
/// folded: masked identifiers are transcribed upper-case or not at all.
pub fn normalize(input: &str) -> Result<String, ValidationError> {
    if !input.chars().all(is_allowed) {
        return Err(ValidationError::InvalidCharacterSet(input.to_string()));
    }

    let stripped: String = input.chars().filter(|c| !MASK_CHARS.contains(c)).collect();

    // Upper-casing is a no-op after the charset check above; kept so callers
    // that pre-validate with a different charset still get canonical output.
    Ok(stripped.to_ascii_uppercase())
}
