//! genfilt CLI library
//!
//! Command-line front end for the gender filters in `genfilt-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
