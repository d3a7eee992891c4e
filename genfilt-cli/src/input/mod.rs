//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{open_input, require_file};
pub use glob_resolver::resolve_patterns;
