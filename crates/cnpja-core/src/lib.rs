//! # cnpja-core — Alphanumeric CNPJ Core
//!
//! Pure functions and a validated domain newtype for Brazilian alphanumeric
//! CNPJ identifiers: a 12-character base over `[0-9A-Z]` followed by two
//! decimal check digits computed from a weighted modulo-11 sum.
//!
//! ## Layers
//!
//! - [`normalize`] — mask stripping and character-set validation.
//! - [`checksum`] — the weight table and check-digit computation.
//! - [`Cnpj`] — the canonical 14-character identifier, validated at
//!   construction, plus the absorbing entry points [`is_valid`] and
//!   [`format`] for callers that want a plain verdict instead of a typed
//!   error.
//!
//! Everything here is synchronous, allocation-light, and free of shared
//! mutable state; the weight table is a compile-time constant. Safe to call
//! concurrently without synchronization.
//!
//! ## Example
//!
//! ```
//! use cnpja_core::{check_digits, is_valid, Cnpj};
//!
//! assert_eq!(check_digits("12ABC34501DE").unwrap(), "35");
//! assert!(is_valid("12.ABC.345/01DE-35"));
//!
//! let cnpj = Cnpj::new("12ABC34501DE35").unwrap();
//! assert_eq!(cnpj.formatted(), "12.ABC.345/01DE-35");
//! ```

pub mod checksum;
pub mod error;
pub mod normalize;

mod cnpj;

pub use checksum::{check_digits, BASE_LEN, WEIGHTS};
pub use cnpj::{format, is_valid, Cnpj, CNPJ_LEN, INVALID_SENTINEL, MASK};
pub use error::ValidationError;
pub use normalize::normalize;
