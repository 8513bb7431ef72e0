//! Library half of the `exprua` command-line tool.
//!
//! The binary parses arguments and prints; everything it runs lives here so
//! it can be tested in-process.

pub mod commands;
mod error;
pub mod logging;

pub use error::CliError;
