//! Customization (partial class) files.
//!
//! Each generated proxy has a sibling `<Name>.partial.cs` declaring the same
//! partial class, where users add their own members. The file is created
//! once and never touched again: if anything exists at that path it is kept
//! as is, without reading or comparing it.

use crate::error::Result;
use crate::filesystem::{ExportOptions, write_file};
use proxy_gen_codegen::ProxyFileComposer;
use proxy_gen_codegen::consts::SOURCE_EXTENSION;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Infix between the class name and the extension of customization files.
pub const PARTIAL_INFIX: &str = "partial";

/// What [`PartialFileManager::ensure`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialOutcome {
    /// The file was absent and has been written
    Created,
    /// A file already existed and was left alone
    Kept,
}

/// Returns the customization file path for a generated file.
///
/// # Examples
///
/// ```
/// use proxy_gen_files::partial::partial_path;
/// use std::path::Path;
///
/// assert_eq!(
///     partial_path(Path::new("ClientProxies/BookClientProxy.cs")),
///     Path::new("ClientProxies/BookClientProxy.partial.cs")
/// );
/// ```
#[must_use]
pub fn partial_path(generated_path: &Path) -> PathBuf {
    let stem = generated_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    generated_path.with_file_name(format!("{stem}.{PARTIAL_INFIX}.{SOURCE_EXTENSION}"))
}

/// Creates customization files when they are missing.
#[derive(Debug)]
pub struct PartialFileManager<'c, 'a> {
    composer: &'c ProxyFileComposer<'a>,
    options: ExportOptions,
}

impl<'c, 'a> PartialFileManager<'c, 'a> {
    /// Creates a manager rendering through `composer`.
    #[must_use]
    pub fn new(composer: &'c ProxyFileComposer<'a>) -> Self {
        Self {
            composer,
            options: ExportOptions::default().with_overwrite(false),
        }
    }

    /// Ensures the customization file for `generated_path` exists.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or writing the file fails.
    pub fn ensure(
        &self,
        class_name: &str,
        namespace: &str,
        generated_path: &Path,
    ) -> Result<PartialOutcome> {
        let path = partial_path(generated_path);

        if path.exists() {
            debug!(path = %path.display(), "keeping existing customization file");
            return Ok(PartialOutcome::Kept);
        }

        let content = self.composer.render_partial(class_name, namespace)?;
        if write_file(&path, &content, &self.options)? {
            Ok(PartialOutcome::Created)
        } else {
            Ok(PartialOutcome::Kept)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_partial_path_replaces_extension() {
        assert_eq!(
            partial_path(Path::new("/out/IdentityUserClientProxy.cs")),
            Path::new("/out/IdentityUserClientProxy.partial.cs")
        );
    }

    #[test]
    fn test_ensure_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let composer = ProxyFileComposer::new().unwrap();
        let manager = PartialFileManager::new(&composer);
        let generated = temp.path().join("BookClientProxy.cs");

        let outcome = manager
            .ensure("BookClientProxy", "Acme.ClientProxies", &generated)
            .unwrap();

        assert_eq!(outcome, PartialOutcome::Created);
        let content = fs::read_to_string(temp.path().join("BookClientProxy.partial.cs")).unwrap();
        assert!(content.contains("public partial class BookClientProxy"));
        assert!(content.contains("namespace Acme.ClientProxies"));
    }

    #[test]
    fn test_ensure_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let composer = ProxyFileComposer::new().unwrap();
        let manager = PartialFileManager::new(&composer);
        let generated = temp.path().join("BookClientProxy.cs");
        let partial = temp.path().join("BookClientProxy.partial.cs");
        fs::write(&partial, "// my customizations").unwrap();

        let outcome = manager
            .ensure("BookClientProxy", "Acme.Other", &generated)
            .unwrap();

        assert_eq!(outcome, PartialOutcome::Kept);
        assert_eq!(fs::read_to_string(partial).unwrap(), "// my customizations");
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let composer = ProxyFileComposer::new().unwrap();
        let manager = PartialFileManager::new(&composer);
        let generated = temp.path().join("BookClientProxy.cs");

        let first = manager
            .ensure("BookClientProxy", "Acme.ClientProxies", &generated)
            .unwrap();
        let before = fs::read_to_string(partial_path(&generated)).unwrap();
        let second = manager
            .ensure("BookClientProxy", "Acme.ClientProxies", &generated)
            .unwrap();

        assert_eq!(first, PartialOutcome::Created);
        assert_eq!(second, PartialOutcome::Kept);
        assert_eq!(fs::read_to_string(partial_path(&generated)).unwrap(), before);
    }
}
