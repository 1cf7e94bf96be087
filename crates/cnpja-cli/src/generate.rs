//! # Generate Subcommand
//!
//! Generates random valid identifiers and prints both the canonical and
//! the masked form. Uniqueness across invocations is not a CLI concern;
//! the API service's persistence layer owns that.

use anyhow::Result;
use clap::Args;

use cnpja_core::Cnpj;

/// Arguments for `cnpja generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of identifiers to generate.
    #[arg(long, default_value_t = 1)]
    pub count: u32,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    for _ in 0..args.count {
        let cnpj = Cnpj::generate();
        println!("{}  {}", cnpj.as_str(), cnpj.formatted());
    }
    Ok(0)
}
