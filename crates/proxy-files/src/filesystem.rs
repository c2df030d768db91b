//! Writing generated files to disk.
//!
//! Every write goes through [`write_file`], which creates missing parent
//! directories and, in atomic mode, writes a hidden temp file beside the
//! target before renaming it into place. An interrupted run therefore never
//! leaves a half-written proxy behind.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_files::{ExportOptions, filesystem::write_file};
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! let path = temp_dir.path().join("ClientProxies/BookClientProxy.cs");
//!
//! let written = write_file(&path, "namespace Acme {}", &ExportOptions::default()).unwrap();
//! assert!(written);
//! assert!(path.exists());
//! ```

use crate::error::{FilesError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for writing generated files.
///
/// # Examples
///
/// ```
/// use proxy_gen_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_atomic_writes(true)
///     .with_overwrite(false);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
    /// Overwrite existing files
    pub overwrite: bool,
}

impl ExportOptions {
    /// Creates new export options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    /// - overwrite: true
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            overwrite: true,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether to overwrite existing files.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a directory and all of its parents.
///
/// # Errors
///
/// Returns [`FilesError::CreateDirectory`] if the directory cannot be created.
pub fn create_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| FilesError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes file content to disk.
///
/// Returns `false` without touching the file if it exists and
/// `options.overwrite` is off.
///
/// # Errors
///
/// Returns error if the parent directory cannot be created or the file
/// cannot be written or moved into place.
pub fn write_file(path: &Path, content: &str, options: &ExportOptions) -> Result<bool> {
    if !options.overwrite && path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    if options.atomic {
        let temp_path = temp_path_for(path);

        let mut file = fs::File::create(&temp_path).map_err(|source| FilesError::Write {
            path: temp_path.clone(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| FilesError::Write {
                path: temp_path.clone(),
                source,
            })?;

        fs::rename(&temp_path, path).map_err(|source| FilesError::Rename {
            from: temp_path,
            to: path.to_path_buf(),
            source,
        })?;
    } else {
        fs::write(path, content).map_err(|source| FilesError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(true)
}

/// Recursively removes a directory if it exists.
///
/// Returns `true` if something was removed.
///
/// # Errors
///
/// Returns [`FilesError::Remove`] if the directory exists but cannot be removed.
pub fn remove_dir_all_if_exists(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }

    fs::remove_dir_all(dir).map_err(|source| FilesError::Remove {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Temp file next to `path`: `Foo.cs` becomes `.Foo.cs.tmp`.
///
/// The full file name is kept so `Foo.cs` and `Foo.partial.cs` never share
/// a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
