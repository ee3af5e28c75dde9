//! Command-line layer: argument parsing, help text, and display plumbing.

pub mod args;
pub mod constants;
pub mod help;
