//! # cnpja-cli — CNPJ Toolkit Command Line
//!
//! Provides the `cnpja` binary. Thin glue over [`cnpja_core`]: each
//! subcommand handler takes its parsed arguments, prints results, and
//! returns a process exit code.
//!
//! ## Subcommands
//!
//! - `cnpja validate <CNPJ>...` — checksum-validate one or more values.
//! - `cnpja format <CNPJ>...` — re-apply the display mask.
//! - `cnpja generate [--count N]` — generate random valid identifiers.
//!
//! ```bash
//! cnpja validate 12.ABC.345/01DE-35 OTWXQENJDKC620
//! cnpja format ABCDEFGHIJKL80
//! cnpja generate --count 5
//! ```

pub mod format;
pub mod generate;
pub mod validate;
