//! Error types for writing generated proxies.

use proxy_gen_core::Error as CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing or removing generated files.
#[derive(Error, Debug)]
pub enum FilesError {
    /// A directory could not be created.
    #[error("failed to create directory {}", .path.display())]
    CreateDirectory {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A temporary file could not be moved into place.
    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        /// Temporary file
        from: PathBuf,
        /// Final destination
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A folder could not be removed.
    #[error("failed to remove {}", .path.display())]
    Remove {
        /// Folder that was being removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Composing or serializing output failed.
    #[error(transparent)]
    Generation(#[from] CoreError),
}

impl FilesError {
    /// Returns the path the failed operation was working on, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::Write { path, .. }
            | Self::Remove { path, .. } => Some(path),
            Self::Rename { to, .. } => Some(to),
            Self::Generation(_) => None,
        }
    }
}

impl From<FilesError> for CoreError {
    fn from(err: FilesError) -> Self {
        match err {
            FilesError::CreateDirectory { path, source }
            | FilesError::Write { path, source }
            | FilesError::Remove { path, source } => Self::io(path, source),
            FilesError::Rename { to, source, .. } => Self::io(to, source),
            FilesError::Generation(inner) => inner,
        }
    }
}

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, FilesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_variants_convert_to_core_io() {
        let err = FilesError::Write {
            path: PathBuf::from("ClientProxies/BookClientProxy.cs"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("BookClientProxy.cs"));

        let core: CoreError = err.into();
        assert!(core.is_io_error());
        assert!(core.to_string().contains("BookClientProxy.cs"));
    }

    #[test]
    fn test_generation_error_is_unwrapped() {
        let err = FilesError::from(CoreError::UsageError {
            message: "bad".to_string(),
        });
        assert!(err.path().is_none());

        let core: CoreError = err.into();
        assert!(core.is_usage_error());
    }

    #[test]
    fn test_rename_reports_destination() {
        let err = FilesError::Rename {
            from: PathBuf::from("a.tmp"),
            to: PathBuf::from("a.cs"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("a.cs")));
    }
}
