//! Command implementations for the proxy generator CLI.
//!
//! Each command module validates its arguments, performs the operation,
//! and formats output according to the requested format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod remove;
