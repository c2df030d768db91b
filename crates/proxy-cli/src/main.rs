//! Client proxy generator CLI.
//!
//! Generates C# client proxies for the application services of a remote
//! service, from its api description model.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Write proxy and customization files into a client project
//! - `remove` - Delete the generated proxy folder
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate from a running service
//! proxy-gen generate --work-directory src/Acme.HttpApi.Client --url https://localhost:44300
//!
//! # Regenerate from the model saved by a previous run
//! proxy-gen generate --work-directory src/Acme.HttpApi.Client \
//!     --model src/Acme.HttpApi.Client/ClientProxies/app-generate-proxy.json
//!
//! # Remove generated proxies
//! proxy-gen remove --work-directory src/Acme.HttpApi.Client
//! ```

#![allow(clippy::unused_async)]

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;
use proxy_gen_cli::commands;
use proxy_gen_cli::commands::generate::ModelSource;
use proxy_gen_core::ModuleName;
use proxy_gen_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Proxy Gen - C# client proxy generator.
#[derive(Parser, Debug)]
#[command(name = "proxy-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate client proxies into a client project.
    ///
    /// Loads the api description model, then writes one
    /// `<Controller>ClientProxy.cs` per application service into the output
    /// folder. Existing proxies are overwritten; `.partial.cs`
    /// customization files are only created when missing.
    #[command(group(ArgGroup::new("source").required(true).args(["model", "url"])))]
    Generate {
        /// Directory containing the `*HttpApi.Client.csproj` project
        #[arg(short, long, env = "PROXY_GEN_WORK_DIRECTORY")]
        work_directory: PathBuf,

        /// Output folder relative to the work directory (default: ClientProxies)
        #[arg(short, long)]
        folder: Option<String>,

        /// Module name, used to name the saved model file
        #[arg(short, long, default_value = ModuleName::DEFAULT)]
        module: String,

        /// Load the model from a JSON file
        #[arg(long)]
        model: Option<PathBuf>,

        /// Fetch the model from the service at this url
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Remove generated client proxies.
    ///
    /// Deletes the output folder recursively, customization files included.
    Remove {
        /// Directory containing the `*HttpApi.Client.csproj` project
        #[arg(short, long, env = "PROXY_GEN_WORK_DIRECTORY")]
        work_directory: PathBuf,

        /// Output folder relative to the work directory (default: ClientProxies)
        #[arg(short, long)]
        folder: Option<String>,

        /// Module name
        #[arg(short, long, default_value = ModuleName::DEFAULT)]
        module: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::USAGE_ERROR.as_i32());
        }
    };

    let exit_code = match execute_command(cli.command, output_format).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to
/// `info`. Logs go to stderr so stdout carries only command output.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Maps a failed command to its exit code.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<proxy_gen_core::Error>() {
        Some(core) if core.is_usage_error() => ExitCode::USAGE_ERROR,
        _ => ExitCode::ERROR,
    }
}

/// Executes the specified CLI command.
async fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            work_directory,
            folder,
            module,
            model,
            url,
        } => {
            let source = match (model, url) {
                (Some(path), _) => ModelSource::File(path),
                (None, Some(url)) => ModelSource::Url(url),
                (None, None) => anyhow::bail!(proxy_gen_core::Error::UsageError {
                    message: "either --model or --url is required".to_string(),
                }),
            };
            commands::generate::run(work_directory, folder, module, source, output_format).await
        }
        Commands::Remove {
            work_directory,
            folder,
            module,
        } => commands::remove::run(work_directory, folder, module, output_format).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}
