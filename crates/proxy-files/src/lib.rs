//! Writing generated client proxies to disk.
//!
//! Takes composed proxies from `proxy-gen-codegen` and manages the output
//! folder: proxy files are overwritten on every run, customization files
//! are created once and then left to the user, and the model used for the
//! run is saved next to them.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_core::ApiDescriptionModel;
//! use proxy_gen_files::{GenerateOptions, ProxyFileWriter};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let options = GenerateOptions::new(temp.path(), "Acme.HttpApi.Client");
//! let writer = ProxyFileWriter::new().unwrap();
//!
//! writer.generate(&ApiDescriptionModel::default(), &options).unwrap();
//! let report = writer.remove(&options).unwrap();
//! assert!(report.removed);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;

pub mod filesystem;
pub mod partial;
pub mod writer;

pub use error::{FilesError, Result};
pub use filesystem::ExportOptions;
pub use partial::{PartialFileManager, PartialOutcome};
pub use writer::{GenerateOptions, GenerationReport, ProxyFileWriter, RemoveReport};
