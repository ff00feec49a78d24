//! CLI command handlers for emojigen.
//!
//! The binary has a single command; these types keep argument handling and
//! exit-code mapping out of `main`.

pub mod common;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::GenerateArgs;
