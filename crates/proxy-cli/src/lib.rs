//! Proxy generator CLI library.
//!
//! Exposes the command implementations and output formatters so they can be
//! tested independently of the binary.

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod formatters;
