//! Work directory checks shared by `generate` and `remove`.
//!
//! Both commands run inside the client project: the work directory must
//! exist and contain exactly one `*HttpApi.Client.csproj` file, whose
//! `<RootNamespace>` becomes the prefix of the generated namespace.

use proxy_gen_core::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// File name suffix identifying the client project.
pub const PROJECT_MARKER_SUFFIX: &str = "HttpApi.Client.csproj";

static ROOT_NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<RootNamespace>\s*([^<]*?)\s*</RootNamespace>").expect("valid regex")
});

/// Verifies the work directory and returns its client project file.
///
/// # Errors
///
/// Returns [`Error::UsageError`] if the directory does not exist, has no
/// client project file, or has more than one. Returns [`Error::Io`] if the
/// directory cannot be listed.
///
/// # Examples
///
/// ```
/// use proxy_gen_cli::commands::common::check_work_directory;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// std::fs::write(temp.path().join("Acme.HttpApi.Client.csproj"), "<Project />").unwrap();
///
/// let project = check_work_directory(temp.path()).unwrap();
/// assert!(project.ends_with("Acme.HttpApi.Client.csproj"));
/// ```
pub fn check_work_directory(work_directory: &Path) -> Result<PathBuf> {
    if !work_directory.is_dir() {
        return Err(Error::UsageError {
            message: format!(
                "Specified directory does not exist: {}",
                work_directory.display()
            ),
        });
    }

    let entries = fs::read_dir(work_directory).map_err(|e| Error::io(work_directory, e))?;

    let mut projects = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(work_directory, e))?.path();
        let is_marker = path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(PROJECT_MARKER_SUFFIX));
        if is_marker {
            projects.push(path);
        }
    }
    projects.sort();

    match projects.len() {
        0 => Err(Error::UsageError {
            message: format!(
                "No project file found in {}. The work directory must contain a *{PROJECT_MARKER_SUFFIX} file.",
                work_directory.display()
            ),
        }),
        1 => {
            let project = projects.remove(0);
            debug!(project = %project.display(), "found client project");
            Ok(project)
        }
        n => Err(Error::UsageError {
            message: format!(
                "Found {n} *{PROJECT_MARKER_SUFFIX} files in {}; expected exactly one.",
                work_directory.display()
            ),
        }),
    }
}

/// Reads the root namespace of a project file.
///
/// Uses the `<RootNamespace>` element when present and non-empty, otherwise
/// the file name without its `.csproj` extension.
///
/// # Errors
///
/// Returns [`Error::Io`] if the project file cannot be read.
pub fn root_namespace(project_file: &Path) -> Result<String> {
    let content = fs::read_to_string(project_file).map_err(|e| Error::io(project_file, e))?;
    Ok(root_namespace_from(&content, project_file))
}

fn root_namespace_from(content: &str, project_file: &Path) -> String {
    ROOT_NAMESPACE_REGEX
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .map_or_else(
            || {
                project_file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            },
            ToString::to_string,
        )
}
