//! Loading api description models.
//!
//! The generator works on an [`ApiDescriptionModel`] describing the remote
//! controllers. This crate obtains one from a local JSON file or from a
//! running service.
//!
//! # Examples
//!
//! ```no_run
//! use proxy_gen_introspector::Introspector;
//!
//! # async fn example() -> proxy_gen_core::Result<()> {
//! let introspector = Introspector::from_url("https://localhost:44300");
//! let model = introspector.load().await?;
//! println!("{} controllers", model.controller_count());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod source;

pub use source::{DescriptionSource, FileSource, HttpSource};

use proxy_gen_core::{ApiDescriptionModel, Result};
use std::path::PathBuf;
use tracing::info;

/// Loads description models from a configured source.
#[derive(Debug)]
pub struct Introspector {
    source: Box<dyn DescriptionSource>,
}

impl Introspector {
    /// Creates an introspector over any source.
    #[must_use]
    pub fn new(source: impl DescriptionSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Creates an introspector reading a JSON file.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Creates an introspector fetching from a service url.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(HttpSource::new(url))
    }

    /// Loads the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the model is malformed.
    pub async fn load(&self) -> Result<ApiDescriptionModel> {
        let model = self.source.load().await?;
        info!(
            source = %self.source.describe(),
            modules = model.modules.len(),
            controllers = model.controller_count(),
            "loaded api description model"
        );
        Ok(model)
    }

    /// Location of the configured source.
    #[must_use]
    pub fn describe(&self) -> String {
        self.source.describe()
    }
}
