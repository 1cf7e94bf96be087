//! # Validate Subcommand
//!
//! Checksum-validates one or more identifiers, masked or unmasked. Prints
//! one verdict line per argument; the exit code is 1 if any argument failed
//! validation.

use anyhow::Result;
use clap::Args;

use cnpja_core::{format, is_valid};

/// Arguments for `cnpja validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate, with or without the display mask.
    #[arg(required = true, value_name = "CNPJ")]
    pub values: Vec<String>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut invalid = 0usize;

    for (i, value) in args.values.iter().enumerate() {
        if is_valid(value) {
            println!("[{}] valid:   {}", i + 1, format(value));
        } else {
            println!("[{}] invalid: {value}", i + 1);
            invalid += 1;
        }
    }

    if invalid > 0 {
        tracing::debug!(invalid, total = args.values.len(), "validation failures");
        return Ok(1);
    }
    Ok(0)
}
