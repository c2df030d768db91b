//! Strong domain types for client proxy generation.
//!
//! Module names and output folders travel through the CLI, the writer and
//! the composer; wrapping them keeps them from being mixed up with the many
//! other strings (type names, namespaces, paths) in play.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_core::{ModuleName, ProxyFolder};
//!
//! let module = ModuleName::new("identity");
//! let folder = ProxyFolder::new("Proxies/Identity").unwrap();
//!
//! assert_eq!(module.as_str(), "identity");
//! assert_eq!(folder.namespace_suffix(), "Proxies.Identity");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// Name of the remote module whose proxies are generated.
///
/// # Examples
///
/// ```
/// use proxy_gen_core::ModuleName;
///
/// assert_eq!(ModuleName::default().as_str(), "app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(String);

impl ModuleName {
    /// Module used when none is specified.
    pub const DEFAULT: &'static str = "app";

    /// Creates a new module name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the module name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModuleName {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Output folder for generated proxies, relative to the work directory.
///
/// A folder is always a directory below the work directory: values that carry
/// a file extension, are absolute, or contain `.` or `..` segments are rejected
/// at construction.
///
/// # Examples
///
/// ```
/// use proxy_gen_core::ProxyFolder;
///
/// let folder = ProxyFolder::default();
/// assert_eq!(folder.as_str(), "ClientProxies");
///
/// assert!(ProxyFolder::new("ClientProxies.cs").is_err());
/// assert!(ProxyFolder::new("../Shared").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProxyFolder(String);

impl ProxyFolder {
    /// Folder used when none is specified.
    pub const DEFAULT: &'static str = "ClientProxies";

    /// Creates a validated output folder.
    ///
    /// Blank input falls back to [`ProxyFolder::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UsageError`] if the folder has a file extension or
    /// does not stay inside the work directory.
    pub fn new(folder: impl Into<String>) -> Result<Self> {
        let folder = folder.into();
        let trimmed = folder.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let path = Path::new(trimmed);
        // `components()` folds interior `.` and `//`, so check raw segments too
        let escapes = !path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        let dotted = trimmed
            .split(['/', '\\'])
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
        if escapes || dotted {
            return Err(Error::UsageError {
                message: format!("Option folder must be relative to the work directory: {trimmed}"),
            });
        }

        if path.extension().is_some() {
            return Err(Error::UsageError {
                message: "Option folder should be a directory.".to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Builds a folder from an optional CLI value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UsageError`] if the folder is invalid.
    pub fn from_option(folder: Option<&str>) -> Result<Self> {
        folder.map_or_else(|| Ok(Self::default()), Self::new)
    }

    /// Returns the folder as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the namespace fragment for this folder (`/` becomes `.`).
    #[must_use]
    pub fn namespace_suffix(&self) -> String {
        self.0.replace(['/', '\\'], ".")
    }
}

impl Default for ProxyFolder {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ProxyFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_default() {
        assert_eq!(ModuleName::default().as_str(), "app");
        assert_eq!(ModuleName::from("identity").to_string(), "identity");
    }

    #[test]
    fn test_folder_default_on_blank() {
        assert_eq!(ProxyFolder::new("  ").unwrap().as_str(), "ClientProxies");
        assert_eq!(
            ProxyFolder::from_option(None).unwrap(),
            ProxyFolder::default()
        );
    }

    #[test]
    fn test_folder_with_extension_rejected() {
        let err = ProxyFolder::new("Proxies/Client.cs").unwrap_err();
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_folder_namespace_suffix() {
        let folder = ProxyFolder::new("Proxies/Identity/").unwrap();
        assert_eq!(folder.as_str(), "Proxies/Identity");
        assert_eq!(folder.namespace_suffix(), "Proxies.Identity");
    }

    #[test]
    fn test_folder_outside_work_directory_rejected() {
        for folder in [
            "../victim",
            "Proxies/../../victim",
            "/tmp/victim",
            "./Proxies",
            "Proxies/./Books",
        ] {
            let err = ProxyFolder::new(folder).unwrap_err();
            assert!(err.is_usage_error(), "{folder} should be rejected");
        }
    }
}
