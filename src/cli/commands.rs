use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::{
    self, derive_version, resolve_install, StubConfig, DEFAULT_ASSEMBLIES, INSTALL_DIR_ENV,
};

/// Command-line interface for the stub generator
///
/// Provides commands for generating Python stub packages from assembly
/// metadata and for cleaning up previous output.
#[derive(Parser)]
#[command(name = "clrstubs-gen")]
#[command(about = "Python stub package generator", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (debug-level tracing)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the stub package tree from a product install
    Generate {
        /// Product install directory holding <assembly>.json metadata and
        /// <assembly>.xml documentation (falls back to STUBS_INSTALL_DIR)
        #[arg(short, long, env = INSTALL_DIR_ENV)]
        install_dir: Option<PathBuf>,

        /// Output directory for the generated package tree
        #[arg(short, long)]
        out: PathBuf,

        /// Assembly to generate; repeat for several (default: the built-in
        /// Mechanical assembly list)
        #[arg(short, long)]
        assembly: Vec<String>,

        /// Dotted package path the generated tree installs under
        #[arg(long, default_value = "ansys.mechanical.stubs")]
        package_root: String,

        /// Product name for the top-level package docstring
        #[arg(long, default_value = "Mechanical")]
        product: String,

        /// Product version for the top-level package docstring
        /// If not provided, derived from the install directory name (v251 -> 25.1)
        #[arg(long)]
        product_version: Option<String>,

        /// Remove a previous output tree before generating
        #[arg(long, default_value_t = false)]
        clean: bool,
    },
    /// Remove a previously generated tree
    Clean {
        /// Output directory to remove
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - No install directory is given and `STUBS_INSTALL_DIR` is unset
/// - Assembly metadata cannot be loaded or parsed
/// - XML documentation is present but malformed
/// - The output tree cannot be written
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            install_dir,
            out,
            assembly,
            package_root,
            product,
            product_version,
            clean,
        } => {
            let install_dir = resolve_install(install_dir)?;
            let version = match product_version {
                Some(version) => version,
                None => derive_version(&install_dir).ok_or_else(|| {
                    anyhow::anyhow!(
                        "cannot derive a product version from {}; pass --product-version",
                        install_dir.display()
                    )
                })?,
            };
            let assemblies = if assembly.is_empty() {
                DEFAULT_ASSEMBLIES.iter().map(|s| s.to_string()).collect()
            } else {
                assembly
            };
            if clean {
                pipeline::clean(&out)?;
            }
            let cfg = StubConfig {
                install_dir,
                out_dir: out,
                assemblies,
                package_root,
                product,
                version,
            };
            pipeline::generate_all(&cfg)
        }
        Commands::Clean { out } => pipeline::clean(&out),
    }
}
