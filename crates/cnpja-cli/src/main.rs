//! # cnpja CLI entry point
//!
//! Parses command-line arguments with clap derive macros and dispatches to
//! the subcommand handlers in [`cnpja_cli`].

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cnpja_cli::format::{run_format, FormatArgs};
use cnpja_cli::generate::{run_generate, GenerateArgs};
use cnpja_cli::validate::{run_validate, ValidateArgs};

/// Alphanumeric CNPJ toolkit.
///
/// Validates, formats, and generates Brazilian alphanumeric CNPJ
/// identifiers (12 characters over 0-9A-Z plus two modulo-11 check digits).
#[derive(Parser, Debug)]
#[command(name = "cnpja", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more identifiers, masked or unmasked.
    Validate(ValidateArgs),

    /// Re-apply the ##.###.###/####-## display mask.
    Format(FormatArgs),

    /// Generate random valid identifiers.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Format(args) => run_format(&args),
        Commands::Generate(args) => run_generate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate_values() {
        let cli = Cli::try_parse_from(["cnpja", "validate", "12ABC34501DE35", "OTWXQENJDKC620"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.values.len(), 2);
            assert_eq!(args.values[0], "12ABC34501DE35");
        }
    }

    #[test]
    fn cli_parse_validate_requires_a_value() {
        assert!(Cli::try_parse_from(["cnpja", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_format_values() {
        let cli = Cli::try_parse_from(["cnpja", "format", "ABCDEFGHIJKL80"]).unwrap();
        assert!(matches!(cli.command, Commands::Format(_)));
    }

    #[test]
    fn cli_parse_format_requires_a_value() {
        assert!(Cli::try_parse_from(["cnpja", "format"]).is_err());
    }

    #[test]
    fn cli_parse_generate_default_count() {
        let cli = Cli::try_parse_from(["cnpja", "generate"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.count, 1);
        } else {
            panic!("expected Generate");
        }
    }

    #[test]
    fn cli_parse_generate_with_count() {
        let cli = Cli::try_parse_from(["cnpja", "generate", "--count", "10"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.count, 10);
        } else {
            panic!("expected Generate");
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["cnpja", "generate"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["cnpja", "-vv", "generate"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["cnpja"]).is_err());
    }

    #[test]
    fn cli_parse_unknown_subcommand_errors() {
        assert!(Cli::try_parse_from(["cnpja", "nonexistent"]).is_err());
    }
}
