//! Canonical alphanumeric CNPJ identifier.
//!
//! [`Cnpj`] holds the canonical 14-character form and validates at
//! construction time: an instance in hand is always checksum-correct.
//! Deserialization routes through the same constructor so invalid values
//! are rejected at the boundary, not silently accepted.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checksum::{check_digits, BASE_LEN};
use crate::error::ValidationError;
use crate::normalize::normalize;

/// Canonical length of a full identifier: 12-character base plus two check
/// digits.
pub const CNPJ_LEN: usize = 14;

/// Display mask re-applied by [`Cnpj::formatted`] and [`format`]. Each `#`
/// takes the next canonical character in order.
pub const MASK: &str = "##.###.###/####-##";

/// Sentinel returned by [`format`] for input that cannot be formatted.
pub const INVALID_SENTINEL: &str = "invalid identifier";

const ZERO_CNPJ: &str = "00000000000000";

/// Alphabet the generator draws base characters from.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A validated alphanumeric CNPJ in canonical (unmasked, upper-case) form.
///
/// Serializes as the canonical 14-character string; [`fmt::Display`] shows
/// the masked form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and validate an identifier, masked or unmasked.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidCharacterSet`] for characters outside
    ///   `[0-9A-Z./-]` (lowercase included).
    /// - [`ValidationError::InvalidBase`] when the canonical form is not 14
    ///   characters or is the all-zero value.
    /// - [`ValidationError::CheckDigitMismatch`] when the suffix disagrees
    ///   with the digits computed from the base.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let canonical = normalize(value.as_ref())?;
        if canonical.len() != CNPJ_LEN || canonical == ZERO_CNPJ {
            return Err(ValidationError::InvalidBase(canonical));
        }

        let (base, suffix) = canonical.split_at(BASE_LEN);
        let computed = check_digits(base)?;
        if suffix != computed {
            return Err(ValidationError::CheckDigitMismatch {
                expected: computed,
                found: suffix.to_string(),
            });
        }

        Ok(Self(canonical))
    }

    /// Generate a random valid identifier using the thread-local RNG.
    ///
    /// Uniqueness is not guaranteed; two calls may collide. Callers that
    /// need uniqueness retry against their own store.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a random valid identifier from the given source.
    ///
    /// Accepting the source as a parameter lets tests substitute a seeded
    /// deterministic generator.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let base: String = (0..BASE_LEN)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect();
            // The all-zero base is the one draw the checksum refuses.
            if let Ok(digits) = check_digits(&base) {
                return Self(base + &digits);
            }
        }
    }

    /// The canonical 14-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-character base (payload before the check digits).
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    /// The two-digit check suffix.
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LEN..]
    }

    /// The masked display form, `##.###.###/####-##`.
    pub fn formatted(&self) -> String {
        apply_mask(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Whether `input` is a valid identifier, masked or unmasked.
///
/// Never panics and never surfaces a typed error; any malformed input is
/// simply `false`. Use [`Cnpj::new`] for diagnostics.
pub fn is_valid(input: &str) -> bool {
    Cnpj::new(input).is_ok()
}

/// Re-apply the canonical display mask to `input`.
///
/// Normalizes first; if normalization fails or the canonical form is not
/// exactly 14 characters, returns [`INVALID_SENTINEL`]. The checksum is
/// deliberately not consulted: formatting is a display concern and must
/// work for checksum-invalid values too.
pub fn format(input: &str) -> String {
    match normalize(input) {
        Ok(canonical) if canonical.len() == CNPJ_LEN => apply_mask(&canonical),
        _ => INVALID_SENTINEL.to_string(),
    }
}

fn apply_mask(canonical: &str) -> String {
    let mut chars = canonical.chars();
    MASK.chars()
        .map(|m| {
            if m == '#' {
                chars.next().expect("canonical length checked by caller")
            } else {
                m
            }
        })
        .collect()
}
