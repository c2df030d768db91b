//! Core types, description model, and errors for client proxy generation.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The api description model (`ApiDescriptionModel` and its parts)
//! - Strong domain types (`ModuleName`, `ProxyFolder`)
//! - The error hierarchy shared by every crate
//! - CLI helper types (`cli::ExitCode`, `cli::OutputFormat`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod model;
mod types;

pub mod cli;

pub use error::{Error, Result};
pub use model::{
    ActionApiDescription, ApiDescriptionModel, ControllerApiDescription,
    ControllerInterfaceApiDescription, MethodParameterApiDescription, ModuleApiDescription,
    ParameterApiDescription, ReturnValueApiDescription,
};
pub use types::{ModuleName, ProxyFolder};
