//! Remove command implementation.
//!
//! Deletes the generated proxy folder, customization files included.

use super::common::check_work_directory;
use anyhow::{Context, Result};
use proxy_gen_core::cli::{ExitCode, OutputFormat};
use proxy_gen_core::{ModuleName, ProxyFolder};
use proxy_gen_files::{GenerateOptions, ProxyFileWriter};
use std::path::PathBuf;
use tracing::info;

/// Runs the remove command.
///
/// The work directory is validated the same way as for `generate`. A
/// missing output folder is not an error.
///
/// # Errors
///
/// Returns an error if the folder option or the work directory is invalid,
/// or if the folder exists but cannot be deleted.
pub async fn run(
    work_directory: PathBuf,
    folder: Option<String>,
    module: String,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let folder = ProxyFolder::from_option(folder.as_deref())?;
    check_work_directory(&work_directory)?;

    let options = GenerateOptions::new(work_directory, String::new())
        .with_folder(folder)
        .with_module(ModuleName::new(module));

    let writer = ProxyFileWriter::new()?;
    let report = writer
        .remove(&options)
        .context("failed to remove client proxies")?;

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    if !report.removed {
        info!("Nothing to remove at {}", report.path.display());
    }

    Ok(ExitCode::SUCCESS)
}
