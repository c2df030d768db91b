//! Generation and removal of the client proxy folder.
//!
//! # Examples
//!
//! ```
//! use proxy_gen_core::{ApiDescriptionModel, ModuleName, ProxyFolder};
//! use proxy_gen_files::{GenerateOptions, ProxyFileWriter};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let model = ApiDescriptionModel::default();
//! let options = GenerateOptions::new(temp.path(), "Acme.HttpApi.Client")
//!     .with_folder(ProxyFolder::default())
//!     .with_module(ModuleName::default());
//!
//! let writer = ProxyFileWriter::new().unwrap();
//! let report = writer.generate(&model, &options).unwrap();
//!
//! assert!(report.written.is_empty());
//! assert!(temp.path().join("ClientProxies/app-generate-proxy.json").exists());
//! ```

use crate::error::Result;
use crate::filesystem::{ExportOptions, create_dir_all, remove_dir_all_if_exists, write_file};
use crate::partial::{PartialFileManager, PartialOutcome};
use proxy_gen_codegen::ProxyFileComposer;
use proxy_gen_codegen::composer::proxy_namespace;
use proxy_gen_core::{ApiDescriptionModel, ModuleName, ProxyFolder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Suffix of the debug artifact holding the model a run used.
pub const MODEL_ARTIFACT_SUFFIX: &str = "-generate-proxy.json";

/// Parameters of one generation or removal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory of the client project
    pub work_directory: PathBuf,
    /// Output folder relative to the work directory
    pub folder: ProxyFolder,
    /// Module name used for the debug artifact
    pub module: ModuleName,
    /// Root namespace of the client project
    pub root_namespace: String,
}

impl GenerateOptions {
    /// Creates options with the default folder and module.
    #[must_use]
    pub fn new(work_directory: impl Into<PathBuf>, root_namespace: impl Into<String>) -> Self {
        Self {
            work_directory: work_directory.into(),
            folder: ProxyFolder::default(),
            module: ModuleName::default(),
            root_namespace: root_namespace.into(),
        }
    }

    /// Sets the output folder.
    #[must_use]
    pub fn with_folder(mut self, folder: ProxyFolder) -> Self {
        self.folder = folder;
        self
    }

    /// Sets the module name.
    #[must_use]
    pub fn with_module(mut self, module: ModuleName) -> Self {
        self.module = module;
        self
    }

    /// Absolute output directory: work directory joined with the folder.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.work_directory.join(self.folder.as_str())
    }

    /// Namespace of the generated classes.
    #[must_use]
    pub fn namespace(&self) -> String {
        proxy_namespace(&self.root_namespace, &self.folder)
    }

    /// Path of the debug artifact, `<output>/<module>-generate-proxy.json`.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir()
            .join(format!("{}{MODEL_ARTIFACT_SUFFIX}", self.module))
    }

    fn display_path<'p>(&self, path: &'p Path) -> std::path::Display<'p> {
        path.strip_prefix(&self.work_directory)
            .unwrap_or(path)
            .display()
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Output directory
    pub output_dir: PathBuf,
    /// Proxy files written (always overwritten)
    pub written: Vec<PathBuf>,
    /// Customization files created in this run
    pub created: Vec<PathBuf>,
    /// Customization files that already existed
    pub kept: Vec<PathBuf>,
    /// Controllers without a generated proxy
    pub skipped: Vec<String>,
    /// Debug artifact path
    pub artifact: PathBuf,
}

impl GenerationReport {
    /// Number of proxies generated.
    #[must_use]
    pub fn proxy_count(&self) -> usize {
        self.written.len()
    }
}

/// Summary of a removal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveReport {
    /// Folder targeted for removal
    pub path: PathBuf,
    /// Whether the folder existed and was removed
    pub removed: bool,
}

/// Writes client proxies for a description model.
#[derive(Debug)]
pub struct ProxyFileWriter<'a> {
    composer: ProxyFileComposer<'a>,
    options: ExportOptions,
}

impl ProxyFileWriter<'_> {
    /// Creates a writer with atomic, overwriting writes.
    ///
    /// # Errors
    ///
    /// Returns error if the templates cannot be registered.
    pub fn new() -> Result<Self> {
        Ok(Self {
            composer: ProxyFileComposer::new()?,
            options: ExportOptions::default(),
        })
    }

    /// Sets the options used for proxy files.
    #[must_use]
    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Recursively deletes the output folder if it exists.
    ///
    /// A missing folder is not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the folder exists but cannot be removed.
    pub fn remove(&self, options: &GenerateOptions) -> Result<RemoveReport> {
        let path = options.output_dir();
        let removed = remove_dir_all_if_exists(&path)?;

        if removed {
            info!("Delete {}", options.display_path(&path));
        } else {
            debug!(path = %path.display(), "nothing to delete");
        }

        Ok(RemoveReport { path, removed })
    }

    /// Generates proxies for every eligible controller, in model order.
    ///
    /// Each proxy file is overwritten, then its customization file is
    /// created if missing. Finally the model is saved as the debug artifact.
    ///
    /// # Errors
    ///
    /// Returns error on the first composition or file-system failure.
    pub fn generate(
        &self,
        model: &ApiDescriptionModel,
        options: &GenerateOptions,
    ) -> Result<GenerationReport> {
        let output_dir = options.output_dir();
        let namespace = options.namespace();
        let partials = PartialFileManager::new(&self.composer);

        create_dir_all(&output_dir)?;

        let mut report = GenerationReport {
            output_dir: output_dir.clone(),
            artifact: options.artifact_path(),
            ..GenerationReport::default()
        };

        for (_, controller) in model.controllers() {
            let Some(composed) = self.composer.compose(controller, &namespace)? else {
                report.skipped.push(controller.controller_name.clone());
                continue;
            };

            let path = output_dir.join(composed.file.path());
            write_file(&path, composed.file.content(), &self.options)?;
            info!("Create {}", options.display_path(&path));

            match partials.ensure(&composed.class_name, &composed.namespace, &path)? {
                PartialOutcome::Created => {
                    let partial = crate::partial::partial_path(&path);
                    info!("Create {}", options.display_path(&partial));
                    report.created.push(partial);
                }
                PartialOutcome::Kept => {
                    report.kept.push(crate::partial::partial_path(&path));
                }
            }

            report.written.push(path);
        }

        let artifact = model.to_pretty_json()?;
        write_file(&report.artifact, &artifact, &self.options)?;
        debug!(path = %report.artifact.display(), "saved description model");

        info!(
            proxies = report.written.len(),
            skipped = report.skipped.len(),
            "client proxy generation finished"
        );

        Ok(report)
    }
}
