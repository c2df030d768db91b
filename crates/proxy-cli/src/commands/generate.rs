//! Generate command implementation.
//!
//! Generates client proxies into the work directory. This command:
//! 1. Validates the output folder and the work directory
//! 2. Reads the root namespace from the client project file
//! 3. Loads the api description model from a file or a running service
//! 4. Writes one proxy and one customization file per application service

use super::common::{check_work_directory, root_namespace};
use anyhow::{Context, Result};
use proxy_gen_core::cli::{ExitCode, OutputFormat};
use proxy_gen_core::{ModuleName, ProxyFolder};
use proxy_gen_files::{GenerateOptions, GenerationReport, ProxyFileWriter};
use proxy_gen_introspector::Introspector;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Where the description model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A JSON file on disk
    File(PathBuf),
    /// A running service, queried at its api definition endpoint
    Url(String),
}

impl ModelSource {
    fn introspector(&self) -> Introspector {
        match self {
            Self::File(path) => Introspector::from_file(path),
            Self::Url(url) => Introspector::from_url(url),
        }
    }
}

/// Result of a generate run.
#[derive(Debug, Serialize)]
struct GenerateResult {
    /// Namespace of the generated classes
    namespace: String,
    /// Where the model was loaded from
    source: String,
    /// Number of proxies written
    proxy_count: usize,
    #[serde(flatten)]
    report: GenerationReport,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - The folder names a file or the work directory is invalid (usage error)
/// - The model cannot be loaded
/// - A file cannot be written
///
/// # Examples
///
/// ```no_run
/// use proxy_gen_cli::commands::generate::{self, ModelSource};
/// use proxy_gen_core::cli::{ExitCode, OutputFormat};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let result = generate::run(
///     PathBuf::from("src/Acme.HttpApi.Client"),
///     None,
///     "app".to_string(),
///     ModelSource::Url("https://localhost:44300".to_string()),
///     OutputFormat::Pretty,
/// ).await?;
/// assert_eq!(result, ExitCode::SUCCESS);
/// # Ok(())
/// # }
/// ```
pub async fn run(
    work_directory: PathBuf,
    folder: Option<String>,
    module: String,
    source: ModelSource,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let folder = ProxyFolder::from_option(folder.as_deref())?;
    let project = check_work_directory(&work_directory)?;
    let root_namespace = root_namespace(&project)?;

    let options = GenerateOptions::new(work_directory, root_namespace)
        .with_folder(folder)
        .with_module(ModuleName::new(module));
    info!(
        "Generating client proxies in {} (namespace {})",
        options.output_dir().display(),
        options.namespace()
    );

    let introspector = source.introspector();
    let model = introspector
        .load()
        .await
        .with_context(|| format!("failed to load api description model from {}", introspector.describe()))?;

    let writer = ProxyFileWriter::new()?;
    let report = writer
        .generate(&model, &options)
        .context("failed to write client proxies")?;

    let result = GenerateResult {
        namespace: options.namespace(),
        source: introspector.describe(),
        proxy_count: report.proxy_count(),
        report,
    };

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    info!(
        "Generated {} client proxies ({} controllers skipped)",
        result.proxy_count,
        result.report.skipped.len()
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(temp: &TempDir) {
        fs::write(
            temp.path().join("Acme.HttpApi.Client.csproj"),
            "<Project><PropertyGroup><RootNamespace>Acme</RootNamespace></PropertyGroup></Project>",
        )
        .unwrap();
    }

    fn model_file(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("model.json");
        fs::write(
            &path,
            r#"{"modules":{"app":{"controllers":{"Acme.Books.BookController":{
                "controllerName":"Book",
                "interfaces":[{"type":"Acme.Books.IBookAppService"}],
                "actions":{"GetAsync":{"name":"GetAsync","returnValue":{"type":"System.Void"},
                    "implementFrom":"Acme.Books.IBookAppService"}}}}}}}"#,
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_generate_from_model_file() {
        let temp = TempDir::new().unwrap();
        project(&temp);
        let model = model_file(&temp);

        let code = run(
            temp.path().to_path_buf(),
            None,
            "app".to_string(),
            ModelSource::File(model),
            OutputFormat::Json,
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let proxy = fs::read_to_string(temp.path().join("ClientProxies/BookClientProxy.cs")).unwrap();
        assert!(proxy.contains("namespace Acme.ClientProxies"));
        assert!(temp.path().join("ClientProxies/BookClientProxy.partial.cs").exists());
        assert!(temp.path().join("ClientProxies/app-generate-proxy.json").exists());
    }

    #[tokio::test]
    async fn test_folder_with_extension_is_usage_error() {
        let temp = TempDir::new().unwrap();
        project(&temp);
        let model = model_file(&temp);

        let err = run(
            temp.path().to_path_buf(),
            Some("Proxies.cs".to_string()),
            "app".to_string(),
            ModelSource::File(model),
            OutputFormat::Json,
        )
        .await
        .unwrap_err();

        let core = err.downcast_ref::<proxy_gen_core::Error>().unwrap();
        assert!(core.is_usage_error());
        assert!(!temp.path().join("Proxies.cs").exists());
    }

    #[tokio::test]
    async fn test_missing_project_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let model = model_file(&temp);

        let err = run(
            temp.path().to_path_buf(),
            None,
            "app".to_string(),
            ModelSource::File(model),
            OutputFormat::Json,
        )
        .await
        .unwrap_err();

        assert!(err
            .downcast_ref::<proxy_gen_core::Error>()
            .is_some_and(proxy_gen_core::Error::is_usage_error));
        assert!(!temp.path().join("ClientProxies").exists());
    }
}
