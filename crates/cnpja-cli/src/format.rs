//! # Format Subcommand
//!
//! Re-applies the `##.###.###/####-##` display mask to one or more
//! identifiers. Formatting is a display concern: checksum-invalid values
//! still format, only values that cannot be normalized to 14 characters
//! are reported as unformattable.

use anyhow::Result;
use clap::Args;

use cnpja_core::{format, INVALID_SENTINEL};

/// Arguments for `cnpja format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Identifiers to format, with or without an existing mask.
    #[arg(required = true, value_name = "CNPJ")]
    pub values: Vec<String>,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs) -> Result<u8> {
    let mut failures = 0usize;

    for (i, value) in args.values.iter().enumerate() {
        let formatted = format(value);
        if formatted == INVALID_SENTINEL {
            failures += 1;
        }
        println!("[{}] {value} -> {formatted}", i + 1);
    }

    Ok(if failures > 0 { 1 } else { 0 })
}
